//! Basic round-trip example

use strkey_core::{decode_account_id, decode_seed, encode_account_id, encode_seed};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("StrKey Round-Trip Example\n");

    // Raw key material as a caller would hold it (32 bytes)
    let public_key: Vec<u8> = (0u8..32).collect();
    let seed_material = [0xA5u8; 32];

    let address = encode_account_id(&public_key);
    let seed = encode_seed(&seed_material);

    println!("Account: {}", address);
    println!("Seed:    {}", seed);

    // Decoding recovers the exact bytes
    let recovered = decode_account_id(&address)?;
    assert_eq!(&recovered[..], &public_key[..]);
    println!("\nAccount payload recovered: {} bytes", recovered.len());

    let recovered = decode_seed(&seed)?;
    assert_eq!(&recovered[..], &seed_material[..]);
    println!("Seed payload recovered:    {} bytes", recovered.len());

    // Decoding under the wrong type tag is rejected
    match decode_seed(&address) {
        Err(e) => println!("\nDecoding the address as a seed fails: {}", e),
        Ok(_) => unreachable!(),
    }

    // So is a mistyped character
    let mut typo = address.clone().into_bytes();
    typo[10] = if typo[10] == b'A' { b'B' } else { b'A' };
    match decode_account_id(&String::from_utf8(typo)?) {
        Err(e) => println!("Decoding with a typo fails:        {}", e),
        Ok(_) => unreachable!(),
    }

    Ok(())
}
