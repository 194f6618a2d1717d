pub struct AminoAcid {
    one_letter_code: char
}

impl AminoAcid {
    fn new(one_letter_code: char) -> AminoAcid {
        return AminoAcid {
            one_letter_code: one_letter_code
        }
    }

    pub fn get_one_letter_code(&self) -> char {
        return self.one_letter_code;
    }
}

/// Case-insensitive lookup, `None` for everything which is not a standard amino acid.
pub fn get(one_letter_code: char) -> Option<AminoAcid> {
    // only the 20 proteinogenic amino acids of the standard code,
    // ambiguity codes (B, J, Z, X) and O/U are not accepted in peptides
    return match one_letter_code.to_ascii_uppercase() {
        code @ 'A' | code @ 'R' | code @ 'N' | code @ 'D' | code @ 'C' |
        code @ 'E' | code @ 'Q' | code @ 'G' | code @ 'H' | code @ 'I' |
        code @ 'L' | code @ 'K' | code @ 'M' | code @ 'F' | code @ 'P' |
        code @ 'S' | code @ 'T' | code @ 'W' | code @ 'Y' | code @ 'V' => Some(AminoAcid::new(code)),
        _ => None
    }
}

pub fn is_standard(one_letter_code: char) -> bool {
    return get(one_letter_code).is_some();
}
