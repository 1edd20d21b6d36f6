/// A physical native representation of a Parquet fixed-sized type.
pub trait NativeType: Sized + Copy + std::fmt::Debug {
    type Bytes: AsRef<[u8]>;

    fn to_le_bytes(&self) -> Self::Bytes;
}

macro_rules! native {
    ($type:ty) => {
        impl NativeType for $type {
            type Bytes = [u8; std::mem::size_of::<Self>()];
            #[inline]
            fn to_le_bytes(&self) -> Self::Bytes {
                Self::to_le_bytes(*self)
            }
        }
    };
}

native!(i32);
native!(i64);
native!(f32);
native!(f64);

impl NativeType for [u32; 3] {
    type Bytes = [u8; 12];

    #[inline]
    fn to_le_bytes(&self) -> Self::Bytes {
        let mut bytes = [0; 12];
        bytes[..4].copy_from_slice(&self[0].to_le_bytes());
        bytes[4..8].copy_from_slice(&self[1].to_le_bytes());
        bytes[8..].copy_from_slice(&self[2].to_le_bytes());
        bytes
    }
}
