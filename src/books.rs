//! Canonical Bible book and month tables.
//!
//! Both tables resolve user fragments with the same rule: an entry matches
//! when its canonical key *contains* the fragment. The first entry in
//! declaration order wins, so `"jo"` resolves to Joshua before Job, Joel,
//! Jonah or John.

/// Static metadata for one Bible book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BibleBook {
    /// Lowercase lookup key, e.g. `"1 samuel"`.
    pub key: &'static str,
    /// Display name, e.g. `"1 Samuel"`.
    pub name: &'static str,
    /// Canonical position, 1..=66.
    pub ordinal: u8,
    pub chapters: u32,
}

const fn book(key: &'static str, name: &'static str, ordinal: u8, chapters: u32) -> BibleBook {
    BibleBook {
        key,
        name,
        ordinal,
        chapters,
    }
}

/// All 66 books in canonical order.
pub const BOOKS: [BibleBook; 66] = [
    book("genesis", "Genesis", 1, 50),
    book("exodus", "Exodus", 2, 40),
    book("leviticus", "Leviticus", 3, 27),
    book("numbers", "Numbers", 4, 36),
    book("deuteronomy", "Deuteronomy", 5, 34),
    book("joshua", "Joshua", 6, 24),
    book("judges", "Judges", 7, 21),
    book("ruth", "Ruth", 8, 4),
    book("1 samuel", "1 Samuel", 9, 31),
    book("2 samuel", "2 Samuel", 10, 24),
    book("1 kings", "1 Kings", 11, 22),
    book("2 kings", "2 Kings", 12, 25),
    book("1 chronicles", "1 Chronicles", 13, 29),
    book("2 chronicles", "2 Chronicles", 14, 36),
    book("ezra", "Ezra", 15, 10),
    book("nehemiah", "Nehemiah", 16, 13),
    book("esther", "Esther", 17, 10),
    book("job", "Job", 18, 42),
    book("psalms", "Psalms", 19, 150),
    book("proverbs", "Proverbs", 20, 31),
    book("ecclesiastes", "Ecclesiastes", 21, 12),
    book("song of solomon", "Song of Solomon", 22, 8),
    book("isaiah", "Isaiah", 23, 66),
    book("jeremiah", "Jeremiah", 24, 52),
    book("lamentations", "Lamentations", 25, 5),
    book("ezekiel", "Ezekiel", 26, 48),
    book("daniel", "Daniel", 27, 12),
    book("hosea", "Hosea", 28, 14),
    book("joel", "Joel", 29, 3),
    book("amos", "Amos", 30, 9),
    book("obadiah", "Obadiah", 31, 1),
    book("jonah", "Jonah", 32, 4),
    book("micah", "Micah", 33, 7),
    book("nahum", "Nahum", 34, 3),
    book("habakkuk", "Habakkuk", 35, 3),
    book("zephaniah", "Zephaniah", 36, 3),
    book("haggai", "Haggai", 37, 2),
    book("zechariah", "Zechariah", 38, 14),
    book("malachi", "Malachi", 39, 4),
    book("matthew", "Matthew", 40, 28),
    book("mark", "Mark", 41, 16),
    book("luke", "Luke", 42, 24),
    book("john", "John", 43, 21),
    book("acts", "Acts", 44, 28),
    book("romans", "Romans", 45, 16),
    book("1 corinthians", "1 Corinthians", 46, 16),
    book("2 corinthians", "2 Corinthians", 47, 13),
    book("galatians", "Galatians", 48, 6),
    book("ephesians", "Ephesians", 49, 6),
    book("philippians", "Philippians", 50, 4),
    book("colossians", "Colossians", 51, 4),
    book("1 thessalonians", "1 Thessalonians", 52, 5),
    book("2 thessalonians", "2 Thessalonians", 53, 3),
    book("1 timothy", "1 Timothy", 54, 6),
    book("2 timothy", "2 Timothy", 55, 4),
    book("titus", "Titus", 56, 3),
    book("philemon", "Philemon", 57, 1),
    book("hebrews", "Hebrews", 58, 13),
    book("james", "James", 59, 5),
    book("1 peter", "1 Peter", 60, 5),
    book("2 peter", "2 Peter", 61, 3),
    book("1 john", "1 John", 62, 5),
    book("2 john", "2 John", 63, 1),
    book("3 john", "3 John", 64, 1),
    book("jude", "Jude", 65, 1),
    book("revelation", "Revelation", 66, 22),
];

const MONTHS: [(&str, &str); 12] = [
    ("january", "01"),
    ("february", "02"),
    ("march", "03"),
    ("april", "04"),
    ("may", "05"),
    ("june", "06"),
    ("july", "07"),
    ("august", "08"),
    ("september", "09"),
    ("october", "10"),
    ("november", "11"),
    ("december", "12"),
];

/// Resolve a (lowercased) book fragment to the first book whose key
/// contains it. Empty fragments never resolve.
pub fn resolve_book(fragment: &str) -> Option<&'static BibleBook> {
    if fragment.is_empty() {
        return None;
    }
    BOOKS.iter().find(|b| b.key.contains(fragment))
}

/// Resolve a (lowercased) month fragment to its two-digit code.
pub fn resolve_month(fragment: &str) -> Option<&'static str> {
    if fragment.is_empty() {
        return None;
    }
    MONTHS
        .iter()
        .find(|(name, _)| name.contains(fragment))
        .map(|(_, code)| *code)
}

impl BibleBook {
    pub fn from_ordinal(ordinal: u8) -> Option<&'static BibleBook> {
        BOOKS.get(usize::from(ordinal).checked_sub(1)?)
    }

    /// Exact, case-insensitive match on the key or display name.
    pub fn from_name(name: &str) -> Option<&'static BibleBook> {
        let wanted = name.trim().to_lowercase();
        BOOKS
            .iter()
            .find(|b| b.key == wanted || b.name.to_lowercase() == wanted)
    }
}
