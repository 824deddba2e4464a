// Bit-level parser primitives using nom
// Input is a (bytes, bit offset into the first byte) pair, read MSB first

use nom::{bits::complete::take, IResult};

/// Parse an unsigned big-endian integer `count` bits wide (at most 64)
pub fn take_bits(count: usize) -> impl Fn((&[u8], usize)) -> IResult<(&[u8], usize), u64> {
    move |input: (&[u8], usize)| take(count)(input)
}

/// Parse a single bit as a flag
pub fn take_flag(input: (&[u8], usize)) -> IResult<(&[u8], usize), bool> {
    let (input, bit) = take_bits(1)(input)?;
    Ok((input, bit == 1))
}
