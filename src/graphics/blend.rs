/// Pixel format expected by softbuffer: `0x00RRGGBB`.
pub type Argb = u32;

pub const BLACK: Argb = 0x00_00_00_00;
pub const WHITE: Argb = 0x00_FF_FF_FF;

pub const fn rgb(r: u8, g: u8, b: u8) -> Argb {
    u32::from_be_bytes([0, r, g, b])
}
