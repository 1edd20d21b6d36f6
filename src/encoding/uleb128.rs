/// Writes `value` as unsigned LEB128 into `container`, returning the number of bytes used.
pub fn encode(mut value: u64, container: &mut [u8; 10]) -> usize {
    let mut consumed = 0;
    loop {
        let mut byte = (value as u8) & !128;
        value >>= 7;
        if value != 0 {
            // more bytes will be written
            byte |= 128;
        }
        container[consumed] = byte;
        consumed += 1;
        if value == 0 {
            break;
        }
    }
    consumed
}

#[cfg(test)]
pub fn decode(values: &[u8]) -> (u64, usize) {
    let mut result = 0;
    let mut shift = 0;

    let mut consumed = 0;
    for byte in values {
        consumed += 1;
        result |= u64::from(byte & 0x7f) << shift;

        if byte & 0x80 == 0 {
            break;
        }

        shift += 7;
    }
    (result, consumed)
}
