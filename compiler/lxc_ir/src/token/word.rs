//! Keyword and reserved-word spellings.
//!
//! Spellings are exact and case-sensitive. `ALL` lists every variant so
//! the lexer can build its classifier from a single source of truth.

macro_rules! word_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal,)* }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $($variant,)*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// Source spelling.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)*
                }
            }

            /// Position in [`Self::ALL`].
            #[inline]
            pub const fn index(self) -> u32 {
                self as u32
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

word_enum! {
    /// Structural keywords.
    Keyword {
        Array => "array",
        Back => "back",
        Bool => "bool",
        Break => "break",
        Catch => "catch",
        Char => "char",
        Class => "class",
        Compare => "compare",
        Cons => "cons",
        Continue => "continue",
        Date => "date",
        Display => "display",
        Do => "do",
        Exclusive => "exclusive",
        Float => "float",
        Func => "func",
        Halt => "halt",
        If => "if",
        In => "in",
        Inclusive => "inclusive",
        Int => "int",
        Let => "let",
        List => "list",
        Main => "main",
        Only => "only",
        Out => "out",
        Priv => "priv",
        Pub => "pub",
        Put => "put",
        Return => "return",
        Stop => "stop",
        Test => "test",
        Text => "text",
        Then => "then",
        This => "this",
        Time => "time",
        Timestamp => "timestamp",
        Try => "try",
        Until => "until",
        Var => "var",
        What => "what",
        When => "when",
        While => "while",
    }
}

word_enum! {
    /// Keyword-shaped words with run-time meaning.
    ReservedWord {
        True => "true",
        False => "false",
        Exit => "exit",
        Cease => "cease",
        System => "system",
        Goto => "goto",
    }
}

impl Keyword {
    /// `int float char text bool time date timestamp`.
    pub const fn is_data_type(self) -> bool {
        matches!(
            self,
            Keyword::Int
                | Keyword::Float
                | Keyword::Char
                | Keyword::Text
                | Keyword::Bool
                | Keyword::Time
                | Keyword::Date
                | Keyword::Timestamp
        )
    }

    /// `let var out in only`.
    pub const fn is_scope_modifier(self) -> bool {
        matches!(
            self,
            Keyword::Let | Keyword::Var | Keyword::Out | Keyword::In | Keyword::Only
        )
    }
}
