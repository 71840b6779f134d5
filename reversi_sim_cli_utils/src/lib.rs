/// Command line options shared by the binaries, and the searches they build.
pub mod cli_args;
