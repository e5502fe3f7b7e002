/// BMP 文件头 (14 字节) 加 BITMAPINFOHEADER (40 字节) 的总大小。
/// 像素数组紧随其后，隐写操作也从这里开始。
pub const BMP_HEADER_SIZE: usize = 54;

/// BITMAPINFOHEADER 的大小 (字节)。
pub const DIB_HEADER_SIZE: u32 = 40;

/// BMP 文件的魔数 "BM"。
pub const BMP_SIGNATURE: [u8; 2] = *b"BM";

/// 唯一支持的位深度。
pub const BITS_PER_PIXEL: u16 = 24;

/// 每个像素占用的字节数 (B, G, R)。
pub const BYTES_PER_PIXEL: usize = 3;

/// 消息结束标记。
pub const MESSAGE_TERMINATOR: u8 = 0x00;

/// 棋盘格图案中每个方格的边长 (像素)。
pub const TILE_SIZE: u32 = 50;

/// 同心圆图案中每个圆环的宽度 (像素)。
pub const RING_WIDTH: f64 = 25.0;

/// 波浪图案的频率。
pub const WAVE_FREQUENCY: f64 = 0.9;
