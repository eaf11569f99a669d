use crate::Error;

pub struct Utils;

impl Utils {
    /// u8 extraction attempt at given byte offset
    pub fn read_u8(buf: &[u8], offset: usize) -> Result<u8, Error> {
        if offset + 1 > buf.len() {
            Err(Error::NotEnoughBytes {
                need: offset + 1,
                avail: buf.len(),
            })
        } else {
            Ok(buf[offset])
        }
    }

    /// Little endian u16 extraction attempt at given byte offset
    pub fn read_u16(buf: &[u8], offset: usize) -> Result<u16, Error> {
        if offset + 2 > buf.len() {
            Err(Error::NotEnoughBytes {
                need: offset + 2,
                avail: buf.len(),
            })
        } else {
            Ok(u16::from_le_bytes([buf[offset], buf[offset + 1]]))
        }
    }

    /// Little endian u32 extraction attempt at given byte offset
    pub fn read_u32(buf: &[u8], offset: usize) -> Result<u32, Error> {
        if offset + 4 > buf.len() {
            Err(Error::NotEnoughBytes {
                need: offset + 4,
                avail: buf.len(),
            })
        } else {
            Ok(u32::from_le_bytes([
                buf[offset],
                buf[offset + 1],
                buf[offset + 2],
                buf[offset + 3],
            ]))
        }
    }

    /// Little endian f32 extraction attempt at given byte offset
    pub fn read_f32(buf: &[u8], offset: usize) -> Result<f32, Error> {
        if offset + 4 > buf.len() {
            Err(Error::NotEnoughBytes {
                need: offset + 4,
                avail: buf.len(),
            })
        } else {
            Ok(f32::from_le_bytes([
                buf[offset],
                buf[offset + 1],
                buf[offset + 2],
                buf[offset + 3],
            ]))
        }
    }

    /// Little endian f64 extraction attempt at given byte offset
    pub fn read_f64(buf: &[u8], offset: usize) -> Result<f64, Error> {
        if offset + 8 > buf.len() {
            Err(Error::NotEnoughBytes {
                need: offset + 8,
                avail: buf.len(),
            })
        } else {
            Ok(f64::from_le_bytes([
                buf[offset],
                buf[offset + 1],
                buf[offset + 2],
                buf[offset + 3],
                buf[offset + 4],
                buf[offset + 5],
                buf[offset + 6],
                buf[offset + 7],
            ]))
        }
    }
}
