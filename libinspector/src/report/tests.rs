use libpvmisa::instruction::InvalidEncoding;

use super::Inspection;

#[test]
fn legal_instruction_report() {
    let inspection = Inspection::new(0x1023);

    assert!(inspection.is_legal());
    assert_eq!(
        inspection.to_string(),
        "divide immediate 1 byte wide with src: a into x\n\
         bit pattern: 0001 0000 00 10 0011, hex: 1023\n\
         family: operation"
    );
}

#[test]
fn nop_report() {
    assert_eq!(
        Inspection::new(0xFFFF).to_string(),
        "NOP\nbit pattern: 1111 1111 11 11 1111, hex: FFFF"
    );
}

#[test]
fn rejected_report_keeps_bit_pattern() {
    let inspection = Inspection::new(0x1101);

    assert!(!inspection.is_legal());
    assert_eq!(
        inspection.outcome,
        Err(InvalidEncoding::SourceEqualsDestination)
    );
    assert_eq!(
        inspection.to_string(),
        "Invalid instruction, source and destination are equal\n\
         bit pattern: 0001 0001 00 00 0001, hex: 1101"
    );
}
