use jwt_lite::claims::keys;
use jwt_lite::{decode, verify, HmacSigner, Signer, Token};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=jwt_lite=debug shows generation and verification events
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Secret key shared by issuer and verifier
    let signer = HmacSigner::hs256(b"my-secret-key-for-hmac-sha256".to_vec());

    let token = create_token(&signer);
    println!("Token: {token}");

    // Verify with the verifier's own signer
    let valid = verify(&token, &signer).expect("Malformed token");
    println!("Signature valid: {valid}");

    // A verifier holding a different key rejects the token
    let other = HmacSigner::hs256(b"some-other-key".to_vec());
    let valid = verify(&token, &other).expect("Malformed token");
    println!("Signature valid with wrong key: {valid}");

    // Malformed input is an error, not a failed check
    match verify("not-a-token", &signer) {
        Ok(valid) => println!("Unexpected result: {valid}"),
        Err(e) => println!("Rejected: {e}"),
    }

    print_claims(&token);
}

/// Create a token with a few registered and custom claims
fn create_token(signer: &dyn Signer) -> String {
    let mut token = Token::new(signer);
    token.set_claim(keys::ISS, "example-issuer");
    token.set_claim(keys::SUB, "example-subject");
    token.set_claim(keys::AUD, "example-audience");
    // Numbers travel as strings
    token.set_claim(keys::EXP, "1893456000");
    token.set_claim("role", "reader");

    token.generate().expect("Failed to generate token")
}

fn print_claims(token: &str) {
    let decoded = decode(token).expect("Failed to decode token");

    println!(
        "Header: typ={} alg={}",
        decoded.header().typ().unwrap_or("-"),
        decoded.header().alg().unwrap_or("-")
    );
    for (key, value) in decoded.claims() {
        println!("  {key} = {value}");
    }
}
