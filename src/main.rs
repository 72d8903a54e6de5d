use clap::Parser;
use giftcard_engine::reader::RequestReader;
use giftcard_engine::service::GiftCardService;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input requests CSV file (code,action,amount)
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut service = GiftCardService::demo();

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = RequestReader::new(file);
    for request in reader.requests() {
        match request {
            Ok(req) => {
                println!("{}", service.handle(&req.code, &req.action, req.amount));
            }
            Err(e) => {
                eprintln!("Error reading request: {}", e);
            }
        }
    }

    Ok(())
}
