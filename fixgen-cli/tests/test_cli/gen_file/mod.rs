mod basic;
mod cli_options;
