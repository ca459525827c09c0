use jwt_lite::{decode, Algorithm, HmacSigner};
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Usage: inspect_token <token> [secret] [algorithm]
///
/// Prints the header and claims of a token. With a secret the signature is
/// checked too; the algorithm defaults to HS256 and is never taken from the token.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let Some(token) = args.next() else {
        eprintln!("usage: inspect_token <token> [secret] [algorithm]");
        return ExitCode::FAILURE;
    };

    let decoded = match decode(&token) {
        Ok(decoded) => decoded,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    println!("header:");
    for (key, value) in decoded.header().to_map() {
        println!("  {key}: {value}");
    }
    println!("claims:");
    for (key, value) in decoded.claims() {
        println!("  {key}: {value}");
    }

    let Some(secret) = args.next() else {
        println!("signature: not checked");
        return ExitCode::SUCCESS;
    };

    let algorithm = match args.next().map(|name| name.parse::<Algorithm>()) {
        None => Algorithm::Hs256,
        Some(Ok(alg)) => alg,
        Some(Err(e)) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let signer = HmacSigner::new(algorithm, secret.into_bytes());
    if decoded.verify(&signer) {
        println!("signature: valid ({algorithm})");
        ExitCode::SUCCESS
    } else {
        println!("signature: INVALID ({algorithm})");
        ExitCode::FAILURE
    }
}
