pub mod entry_line;
