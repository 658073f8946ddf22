//! Sample patterns offered to users who don't have a regex at hand.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamplePattern {
    pub pattern: &'static str,
    pub description: &'static str,
}

pub const EXAMPLE_PATTERNS: &[ExamplePattern] = &[
    ExamplePattern {
        pattern: "ab(b|c)*d+",
        description: "alternation and repetition",
    },
    ExamplePattern {
        pattern: "(a|b)*c",
        description: "simple alternation with star",
    },
    ExamplePattern {
        pattern: "a+b*",
        description: "one or more, zero or more",
    },
];
