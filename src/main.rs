use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// School mail from the personalized invite link.
    school_mail: String,

    /// State filter for the partner-school search.
    #[arg(long)]
    state: Option<String>,

    /// City filter, used together with --state.
    #[arg(long, requires = "state")]
    city: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    enroll::run(
        &args.school_mail,
        args.state.as_deref(),
        args.city.as_deref(),
    )
    .await;
}
