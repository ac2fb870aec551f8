//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the NMOS 6502. Each mode fixes
//! how many operand bytes follow the opcode and how those bytes are rendered in
//! a listing.

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Example: `LSR A`
    Accumulator,

    /// 8-bit constant operand, rendered `#$nn`.
    Immediate,

    /// 8-bit address in zero page, rendered `$nn`.
    ZeroPage,

    /// Zero page address indexed by X, rendered `$nn,X`.
    ZeroPageX,

    /// Zero page address indexed by Y, rendered `$nn,Y`.
    ZeroPageY,

    /// Signed 8-bit branch offset, rendered `*+n` or `*-n`.
    ///
    /// The offset is shown as written in source (relative to `*`), not as a
    /// resolved target address.
    Relative,

    /// Full 16-bit address, rendered `$nnnn`.
    Absolute,

    /// 16-bit address indexed by X, rendered `$nnnn,X`.
    AbsoluteX,

    /// 16-bit address indexed by Y, rendered `$nnnn,Y`.
    AbsoluteY,

    /// Indirect jump through a 16-bit pointer, rendered `($nnnn)`.
    ///
    /// Only used by JMP.
    Indirect,

    /// Indexed indirect, rendered `($nn,X)`.
    IndirectX,

    /// Indirect indexed, rendered `($nn),Y`.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_len(self) -> u8 {
        use AddressingMode::*;

        match self {
            Implied | Accumulator => 0,
            Immediate | ZeroPage | ZeroPageX | ZeroPageY | Relative | IndirectX | IndirectY => 1,
            Absolute | AbsoluteX | AbsoluteY | Indirect => 2,
        }
    }

    /// Render the operand text for this mode.
    ///
    /// `operand` holds the raw operand bytes in stream order; two-byte operands
    /// are little-endian. Returns an empty string for modes without an operand.
    /// Missing bytes render as `?` placeholders so a short slice never panics.
    ///
    /// ```
    /// use dis6502::AddressingMode;
    ///
    /// assert_eq!(AddressingMode::Immediate.format_operand(&[0x05]), "#$05");
    /// assert_eq!(AddressingMode::AbsoluteX.format_operand(&[0x34, 0x12]), "$1234,X");
    /// assert_eq!(AddressingMode::Relative.format_operand(&[0xFE]), "*-2");
    /// ```
    pub fn format_operand(self, operand: &[u8]) -> String {
        use AddressingMode::*;

        let byte = || operand.first().map(|b| format!("{:02X}", b));
        let word = || match operand {
            [lo, hi, ..] => Some(format!("{:04X}", u16::from_le_bytes([*lo, *hi]))),
            _ => None,
        };

        match self {
            Implied => String::new(),
            Accumulator => "A".to_string(),
            Immediate => format!("#${}", byte().unwrap_or_else(|| "??".into())),
            ZeroPage => format!("${}", byte().unwrap_or_else(|| "??".into())),
            ZeroPageX => format!("${},X", byte().unwrap_or_else(|| "??".into())),
            ZeroPageY => format!("${},Y", byte().unwrap_or_else(|| "??".into())),
            Relative => match operand.first() {
                Some(&raw) => {
                    let offset = raw as i8;
                    if offset > 0 {
                        format!("*+{}", offset)
                    } else {
                        format!("*{}", offset)
                    }
                }
                None => "*??".to_string(),
            },
            Absolute => format!("${}", word().unwrap_or_else(|| "????".into())),
            AbsoluteX => format!("${},X", word().unwrap_or_else(|| "????".into())),
            AbsoluteY => format!("${},Y", word().unwrap_or_else(|| "????".into())),
            Indirect => format!("(${})", word().unwrap_or_else(|| "????".into())),
            IndirectX => format!("(${},X)", byte().unwrap_or_else(|| "??".into())),
            IndirectY => format!("(${}),Y", byte().unwrap_or_else(|| "??".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_len() {
        assert_eq!(AddressingMode::Implied.operand_len(), 0);
        assert_eq!(AddressingMode::Accumulator.operand_len(), 0);
        assert_eq!(AddressingMode::Relative.operand_len(), 1);
        assert_eq!(AddressingMode::IndirectY.operand_len(), 1);
        assert_eq!(AddressingMode::Indirect.operand_len(), 2);
        assert_eq!(AddressingMode::AbsoluteY.operand_len(), 2);
    }

    #[test]
    fn test_format_every_mode() {
        use AddressingMode::*;

        let cases: [(AddressingMode, &[u8], &str); 13] = [
            (Implied, &[], ""),
            (Accumulator, &[], "A"),
            (Immediate, &[0x0A], "#$0A"),
            (ZeroPage, &[0x80], "$80"),
            (ZeroPageX, &[0x80], "$80,X"),
            (ZeroPageY, &[0x80], "$80,Y"),
            (Relative, &[0x05], "*+5"),
            (Absolute, &[0x00, 0xD0], "$D000"),
            (AbsoluteX, &[0x00, 0xD0], "$D000,X"),
            (AbsoluteY, &[0x00, 0x02], "$0200,Y"),
            (Indirect, &[0xFC, 0xFF], "($FFFC)"),
            (IndirectX, &[0x40], "($40,X)"),
            (IndirectY, &[0x40], "($40),Y"),
        ];

        for (mode, operand, expected) in cases {
            assert_eq!(mode.format_operand(operand), expected, "{:?}", mode);
        }
    }

    #[test]
    fn test_format_relative_sign() {
        assert_eq!(AddressingMode::Relative.format_operand(&[0x00]), "*0");
        assert_eq!(AddressingMode::Relative.format_operand(&[0x7F]), "*+127");
        assert_eq!(AddressingMode::Relative.format_operand(&[0x80]), "*-128");
        assert_eq!(AddressingMode::Relative.format_operand(&[0xF6]), "*-10");
    }

    #[test]
    fn test_format_short_operand() {
        assert_eq!(AddressingMode::Absolute.format_operand(&[0x12]), "$????");
        assert_eq!(AddressingMode::Immediate.format_operand(&[]), "#$??");
    }
}
