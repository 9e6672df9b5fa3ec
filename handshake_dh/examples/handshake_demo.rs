use handshake_dh::{DhContext, DhError};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn prefix(bytes: &[u8]) -> String {
    format!("{}...", hex::encode(&bytes[..16]))
}

fn main() -> Result<(), DhError> {
    env_logger::init();
    println!("=== Diffie-Hellman Handshake Demo ===");

    let mut alice: DhContext = DhContext::new(1024)?;
    let mut bob: DhContext = DhContext::new(1024)?;
    println!("Modulus: {} bits", alice.group().modulus_bits());

    // Seeded for a reproducible transcript; real peers use generate_key_pair().
    alice.generate_key_pair_with(&mut StdRng::seed_from_u64(0xAF1CE5EED))?;
    bob.generate_key_pair_with(&mut StdRng::seed_from_u64(0xB0B5EED))?;

    let mut alice_pub = [0u8; 128];
    let mut bob_pub = [0u8; 128];
    alice.public_key_bytes(&mut alice_pub)?;
    bob.public_key_bytes(&mut bob_pub)?;
    println!("  Alice's public value: {}", prefix(&alice_pub));
    println!("  Bob's public value:   {}\n", prefix(&bob_pub));

    let mut secret_alice = [0u8; 128];
    let mut secret_bob = [0u8; 128];
    let n = alice.compute_shared_secret(&bob_pub, &mut secret_alice)?;
    bob.compute_shared_secret(&alice_pub, &mut secret_bob)?;

    if secret_alice == secret_bob {
        println!("SUCCESS: {n}-byte shared secrets match!");
        println!("Shared secret (hex): {}", hex::encode(secret_alice));
    } else {
        println!("ERROR: Shared secrets DO NOT match!");
    }

    Ok(())
}
