use joiner::{concatenate, join, JoinConfig, JoinedText};

fn main() {
    let cfg = JoinConfig::default();

    let out: JoinedText = join("Hello", " World   ", &cfg).expect("join succeeds");
    println!("joined: {:?}", out.text);
    println!("sha256: {}", out.sha256_hex);
    println!();

    let plain = JoinConfig {
        trim_trailing: false,
        ..Default::default()
    };
    let kept = join("Hello", " World   ", &plain).expect("join succeeds");
    println!("plain policy: {:?}", kept.text);
    println!();

    println!("concatenate: {:?}", concatenate("Hello", " there"));
}
