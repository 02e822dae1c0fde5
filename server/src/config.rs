use clap::Parser;

/// Command-line options. Password hashes are read from the environment
/// instead (see `credential`) so secrets stay out of process listings.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct ServerArgs {
    /// Address to bind to
    #[clap(short = 'H', long, default_value = "0.0.0.0")]
    pub host: String,
    /// Port to listen on
    #[clap(short, long, default_value = "3000", env = "PORT")]
    pub port: u16,
}
