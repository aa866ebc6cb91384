use std::mem::size_of;

use uintn::uint_n;

fn main() {
    show_memory("uint_n!(11, u8)", 11, size_of::<uint_n!(11, u8)>());
    show_memory("uint_n!(26, u8)", 26, size_of::<uint_n!(26, u8)>());
    show_memory("uint_n!(26, u32)", 26, size_of::<uint_n!(26, u32)>());
    show_memory("uint_n!(64)", 64, size_of::<uint_n!(64)>());
    show_memory("uint_n!(256)", 256, size_of::<uint_n!(256)>());
    show_memory("uint_n!(300)", 300, size_of::<uint_n!(300)>());
    show_memory("uint_n!(300, u8)", 300, size_of::<uint_n!(300, u8)>());
}

fn show_memory(name: &str, bits: usize, bytes: usize) {
    println!(
        "{}: {:.3} storage bits per logical bit",
        name,
        (bytes * 8) as f64 / bits as f64
    );
}
