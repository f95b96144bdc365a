// Skill catalog — the static knowledge base the scorer matches against.
//
// Four fixed categories of skill keywords plus a semantic-equivalence map.
// Loaded once at startup (built-in list, optionally overridden from CSV)
// and passed into the scorer by reference; nothing here mutates after
// construction.

pub mod category;
pub mod pattern;
pub mod semantic;
pub mod skills;
