//! Unicode character database access.
//!
//! [`UnicodeData`] is the seam between the lookup engine and the tables it
//! consults. [`Ucd`] is the production implementation, backed by
//! `unicode_names2` for names and `unicode-general-category` for
//! classification.

use unicode_general_category::{get_general_category, GeneralCategory};

use super::types::models::Codepoint;

/// Unicode general category, by its two-letter alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Lu,
    Ll,
    Lt,
    Lm,
    Lo,
    Mn,
    Mc,
    Me,
    Nd,
    Nl,
    No,
    Pc,
    Pd,
    Ps,
    Pe,
    Pi,
    Pf,
    Po,
    Sm,
    Sc,
    Sk,
    So,
    Zs,
    Zl,
    Zp,
    Cc,
    Cf,
    Cs,
    Co,
    Cn,
}

impl Category {
    /// Letters, marks, numbers, punctuation and symbols: the classes that
    /// have a visible glyph of their own.
    pub fn is_graphic(self) -> bool {
        use Category::*;
        matches!(
            self,
            Lu | Ll | Lt | Lm | Lo
                | Mn | Mc | Me
                | Nd | Nl | No
                | Pc | Pd | Ps | Pe | Pi | Pf | Po
                | Sm | Sc | Sk | So
        )
    }
}

/// The lookups the engine needs from the character database.
pub trait UnicodeData {
    /// Canonical character name, if the database assigns one.
    fn name(&self, cp: Codepoint) -> Option<String>;

    /// General category. Out-of-range values are [`Category::Cn`].
    fn category(&self, cp: Codepoint) -> Category;

    fn is_assigned(&self, cp: Codepoint) -> bool {
        self.category(cp) != Category::Cn
    }

    /// Every assigned codepoint, in ascending order.
    fn assigned(&self) -> Assigned<'_, Self>
    where
        Self: Sized,
    {
        Assigned { ucd: self, next: 0 }
    }
}

/// Ascending walk over the assigned codepoints of a [`UnicodeData`].
///
/// Created by [`UnicodeData::assigned`].
pub struct Assigned<'a, U: UnicodeData> {
    ucd: &'a U,
    next: u32,
}

impl<U: UnicodeData> Iterator for Assigned<'_, U> {
    type Item = Codepoint;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next <= Codepoint::MAX {
            let cp = Codepoint(self.next);
            self.next += 1;
            // Surrogates have no names; skip them rather than yield them.
            if !cp.is_surrogate() && self.ucd.is_assigned(cp) {
                return Some(cp);
            }
        }
        None
    }
}

/// The bundled Unicode character database.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ucd;

impl UnicodeData for Ucd {
    fn name(&self, cp: Codepoint) -> Option<String> {
        let c = cp.as_char()?;
        if let Some(name) = unicode_names2::name(c) {
            return Some(name.to_string());
        }
        // Tangut names are derived from the codepoint (rule NR2) and are
        // missing from the name tables.
        match cp.value() {
            0x17000..=0x187F7 | 0x18D00..=0x18D08 => {
                Some(format!("TANGUT IDEOGRAPH-{:X}", cp.value()))
            }
            _ => None,
        }
    }

    fn category(&self, cp: Codepoint) -> Category {
        if cp.is_surrogate() {
            return Category::Cs;
        }
        match cp.as_char() {
            Some(c) => from_general_category(get_general_category(c)),
            None => Category::Cn,
        }
    }
}

#[allow(unreachable_patterns)]
fn from_general_category(gc: GeneralCategory) -> Category {
    use GeneralCategory as G;
    match gc {
        G::UppercaseLetter => Category::Lu,
        G::LowercaseLetter => Category::Ll,
        G::TitlecaseLetter => Category::Lt,
        G::ModifierLetter => Category::Lm,
        G::OtherLetter => Category::Lo,
        G::NonspacingMark => Category::Mn,
        G::SpacingMark => Category::Mc,
        G::EnclosingMark => Category::Me,
        G::DecimalNumber => Category::Nd,
        G::LetterNumber => Category::Nl,
        G::OtherNumber => Category::No,
        G::ConnectorPunctuation => Category::Pc,
        G::DashPunctuation => Category::Pd,
        G::OpenPunctuation => Category::Ps,
        G::ClosePunctuation => Category::Pe,
        G::InitialPunctuation => Category::Pi,
        G::FinalPunctuation => Category::Pf,
        G::OtherPunctuation => Category::Po,
        G::MathSymbol => Category::Sm,
        G::CurrencySymbol => Category::Sc,
        G::ModifierSymbol => Category::Sk,
        G::OtherSymbol => Category::So,
        G::SpaceSeparator => Category::Zs,
        G::LineSeparator => Category::Zl,
        G::ParagraphSeparator => Category::Zp,
        G::Control => Category::Cc,
        G::Format => Category::Cf,
        G::Surrogate => Category::Cs,
        G::PrivateUse => Category::Co,
        G::Unassigned => Category::Cn,
        _ => Category::Cn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_categories() {
        assert_eq!(
            Ucd.name(Codepoint(0xE9)).as_deref(),
            Some("LATIN SMALL LETTER E WITH ACUTE")
        );
        assert_eq!(Ucd.category(Codepoint(0x301)), Category::Mn);
        assert_eq!(Ucd.category(Codepoint(0x41)), Category::Lu);
        assert_eq!(Ucd.category(Codepoint(0x0A)), Category::Cc);
        assert_eq!(Ucd.category(Codepoint(0xD800)), Category::Cs);
        assert_eq!(Ucd.category(Codepoint(0x110000)), Category::Cn);
    }

    #[test]
    fn tangut_names_are_derived() {
        assert_eq!(Ucd.name(Codepoint(0x17000)).as_deref(), Some("TANGUT IDEOGRAPH-17000"));
        assert_eq!(Ucd.name(Codepoint(0x187F7)).as_deref(), Some("TANGUT IDEOGRAPH-187F7"));
        assert_eq!(Ucd.name(Codepoint(0x18D08)).as_deref(), Some("TANGUT IDEOGRAPH-18D08"));
        assert_eq!(Ucd.category(Codepoint(0x17000)), Category::Lo);
        // Tangut components have table names of their own.
        assert_eq!(
            Ucd.name(Codepoint(0x18800)).as_deref(),
            Some("TANGUT COMPONENT-001")
        );
    }

    #[test]
    fn assigned_is_ascending_and_skips_gaps() {
        let first: Vec<u32> = Ucd.assigned().take(3).map(Codepoint::value).collect();
        assert_eq!(first, vec![0, 1, 2]);

        let mut prev = None;
        for cp in Ucd.assigned().take(5000) {
            assert!(Some(cp) > prev);
            prev = Some(cp);
        }
        // U+0378 is unassigned.
        assert!(!Ucd.is_assigned(Codepoint(0x378)));
        assert!(Ucd.assigned().all(|cp| !cp.is_surrogate()));
    }
}
