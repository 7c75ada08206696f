use crate::Show;

/// The input that stands for the empty word. Runs on this input do not consume any symbol,
/// they are decided by the start state alone.
pub const EMPTY_WORD_SENTINEL: &str = "e";

/// A finite input word, as seen by an automaton. Obtained from a string through
/// [`Word::parse`], which fixes how the empty word is spelled.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Word<'a> {
    /// The empty word, written either as [`EMPTY_WORD_SENTINEL`] or as the zero-length string.
    Empty,
    /// A non-empty sequence of symbols, one per `char` of the underlying string.
    Symbols(&'a str),
}

impl<'a> Word<'a> {
    /// Interprets `input` as a word. Exactly two spellings denote the empty word: the
    /// sentinel `"e"` and `""`. Every other string, including `"ee"`, is read symbol by symbol.
    pub fn parse(input: &'a str) -> Self {
        if input.is_empty() || input == EMPTY_WORD_SENTINEL {
            Word::Empty
        } else {
            Word::Symbols(input)
        }
    }

    /// Returns an iterator over the symbols of the word, which is empty for [`Word::Empty`].
    pub fn symbols(&self) -> std::str::Chars<'a> {
        match self {
            Word::Empty => "".chars(),
            Word::Symbols(s) => (*s).chars(),
        }
    }

    /// Returns the number of symbols in the word.
    pub fn len(&self) -> usize {
        self.symbols().count()
    }

    /// Returns `true` for the empty word.
    pub fn is_empty(&self) -> bool {
        matches!(self, Word::Empty)
    }
}

impl<'a> From<&'a str> for Word<'a> {
    fn from(value: &'a str) -> Self {
        Word::parse(value)
    }
}

impl Show for Word<'_> {
    fn show(&self) -> String {
        match self {
            Word::Empty => "ε".to_string(),
            Word::Symbols(s) => format!("\"{s}\""),
        }
    }
}
