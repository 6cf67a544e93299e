use clap::Parser;

#[derive(Debug, Parser)]
#[clap(about = "Run a single compiler invocation described by a build rule", version)]
pub struct Arguments {
    #[clap(help = "Set a target")]
    pub target: String,
    #[clap(required = true, help = "Set dependencies")]
    pub dependencies: Vec<String>,
    #[clap(long = "cc", default_value = "cc", env = "NOBUILD_CC", help = "Set a compiler")]
    pub compiler: String,
    #[clap(
        short = 'f',
        long = "flag",
        allow_hyphen_values = true,
        help = "Add a compiler flag"
    )]
    pub flags: Vec<String>,
    #[clap(short, help = "Set an output file")]
    pub output: String,
    #[clap(short = 'C', help = "Set a working directory")]
    pub directory: Option<String>,
    #[clap(long, help = "Set a timeout in seconds", env = "NOBUILD_TIMEOUT")]
    pub timeout: Option<f64>,
    #[clap(long, help = "Set a log prefix")]
    pub log_prefix: Option<String>,
    #[clap(long, help = "Show no message on failure of the compiler")]
    pub quiet: bool,
    #[clap(long, help = "Show debug logs", env = "NOBUILD_DEBUG")]
    pub debug: bool,
}
