//! Decode the packet produced by the write example through a memory map
//!
//! Demonstrates the batch-check pattern: decode every field first, then
//! look at the overflow flag once.

use bstream::MappedStream;

fn main() -> std::io::Result<()> {
    let mapped = MappedStream::open("example_packet.bin")?;
    println!("Mapped {} bytes", mapped.len());

    let mut reader = mapped.stream();
    let id = reader.get_u8().unwrap_or_default();
    let sequence = reader.get_var_u32().unwrap_or_default();
    let message = reader.get_string().unwrap_or_default();
    let ratio = reader.get_normalized_f32().unwrap_or_default();
    let delta = reader.get_var_i64().unwrap_or_default();

    if reader.is_overflowed() {
        eprintln!("Packet is truncated, discarding");
        std::process::exit(1);
    }

    println!("id       = {id:#04x}");
    println!("sequence = {sequence}");
    println!("message  = {message:?}");
    println!("ratio    = {ratio}");
    println!("delta    = {delta}");
    Ok(())
}
