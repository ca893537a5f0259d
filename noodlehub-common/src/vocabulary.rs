//! Noodle and pasta type vocabulary
//!
//! Order is significant: when a recipe mentions several types, the earliest
//! entry here wins.

/// Known noodle/pasta types, lower-case, in priority order
pub const NOODLE_TYPES: &[&str] = &[
    "spaghetti",
    "penne",
    "elbow macaroni",
    "fettuccine",
    "lasagna",
    "ramen noodles",
    "ziti",
    "egg noodles",
    "instant ramen",
    "tagliatelle",
    "fusilli pasta",
    "bowtie",
    "gnocchi",
    "rigatoni",
];
