// Routines for reading data files
pub mod datafile;
// Routines for logging
pub mod logger;
// Routines for output
pub mod output;
// Routines for settings
pub mod settings;
// Routines for daily statistics
pub mod statistics;
