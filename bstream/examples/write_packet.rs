//! Encode a small example packet and save it for the read example

use bstream::BinaryStream;

fn main() -> std::io::Result<()> {
    println!("Encoding example packet...");

    let mut writer = BinaryStream::new();
    writer.write_u8(0x01); // packet id
    writer.write_var_u32(42); // sequence number
    writer.write_string("hello bstream");
    writer.write_normalized_f32(0.5);
    writer.write_var_i64(-123_456_789);

    let data = writer.take_data();
    println!("Encoded {} bytes", data.len());

    std::fs::write("example_packet.bin", &data)?;
    println!("\nRun 'cargo run --example read_packet' to read it back!");
    Ok(())
}
