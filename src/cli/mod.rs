use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// List available MIDI output ports
    #[arg(long)]
    pub device_list: bool,

    /// Bind MIDI output to the first port whose name contains this string,
    /// instead of the default port
    #[arg(long)]
    pub bind_to_port: Option<String>,
}
