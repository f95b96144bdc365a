// Output formatting — terminal display of score reports.

pub mod terminal;
