/// Implements `Debug` for a type that has a fixed-width byte encoding.
///
/// The output is the type name followed by the hex encoding in parentheses,
/// e.g. `FieldElement(00689918dbec7e5a0dd6dfc0aa55c7)`.
#[doc(hidden)]
#[macro_export]
macro_rules! impl_debug {
    (fn to_bytes($self:ident : &$type_name:ident) -> [u8;$len:literal] $block:block) => {
        impl core::fmt::Debug for $type_name {
            /// Formats the type as hex.
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                let $self = &self;
                let bytes: [u8; $len] = $block;
                write!(f, "{}(", stringify!($type_name))?;
                for byte in bytes.iter() {
                    write!(f, "{:02x}", byte)?
                }
                write!(f, ")")
            }
        }
    };
}

/// Implements `Display` and (with the `serde` feature) `Serialize` for a type
/// that has a fixed-width byte encoding.
#[doc(hidden)]
#[macro_export]
macro_rules! impl_display_serialize {
    (fn to_bytes($self:ident : &$type:ident) -> [u8;$len:literal] $block:block) => {
        #[cfg(feature = "serde")]
        impl $crate::serde::Serialize for $type {
            fn serialize<Ser: $crate::serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
                use $crate::serde::ser::SerializeTuple;
                let $self = &self;
                let bytes: [u8; $len] = $block;

                #[cfg(feature = "alloc")]
                {
                    use $crate::hex;
                    if serializer.is_human_readable() {
                        return serializer.serialize_str(&hex::encode(&bytes[..]))
                    }
                }

                let mut tup = serializer.serialize_tuple($len)?;
                for byte in bytes.iter() {
                    tup.serialize_element(byte)?;
                }
                tup.end()
            }
        }

        impl core::fmt::Display for $type {
            /// Displays as hex.
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                let $self = &self;
                let bytes: [u8; $len] = $block;
                for byte in bytes.iter() {
                    write!(f, "{:02x}", byte)?
                }
                Ok(())
            }
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! impl_display_debug_serialize {
    ($($tt:tt)+) => {
        $crate::impl_display_serialize!($($tt)+);
        $crate::impl_debug!($($tt)+);
    };
}

/// Implements `FromStr` and (with the `serde` feature) `Deserialize` for a
/// type that can be decoded from a fixed-width byte array.
#[macro_export]
#[cfg_attr(rustfmt, rustfmt::skip)]
#[doc(hidden)]
macro_rules! impl_fromstr_deserialize {
    (
        name => $name:literal,
        fn from_bytes($input:ident : [u8;$len:literal]) -> Option<$type:ident> $block:block
    ) => {

        impl core::str::FromStr for $type {
            type Err = $crate::hex::HexError;

            /// Parses the string as hex and tries to convert the resulting
            /// byte array into the desired value.
            fn from_str(hex: &str) -> Result<$type, $crate::hex::HexError> {
                let $input = $crate::hex::decode_array::<$len>(hex)?;
                let result: Option<$type> = $block;
                result.ok_or($crate::hex::HexError::InvalidEncoding)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> $crate::serde::Deserialize<'de> for $type {
            fn deserialize<Deser: $crate::serde::Deserializer<'de>>(
                deserializer: Deser,
            ) -> Result<$type, Deser::Error> {

                if deserializer.is_human_readable() {
                    struct HexVisitor;
                    impl<'de> $crate::serde::de::Visitor<'de> for HexVisitor {
                        type Value = $type;
                        fn expecting(
                            &self,
                            f: &mut core::fmt::Formatter,
                        ) -> core::fmt::Result {
                            write!(f, "a valid {}-byte hex encoded {}", $len, $name)
                        }

                        fn visit_str<E: $crate::serde::de::Error>(self, v: &str) -> Result<$type, E> {
                            use $crate::hex::HexError::*;
                            <$type as core::str::FromStr>::from_str(v).map_err(|e| match e {
                                InvalidLength => E::invalid_length(v.len() / 2, &self),
                                InvalidEncoding => E::invalid_value($crate::serde::de::Unexpected::Str(v), &self),
                                InvalidHex => E::custom("invalid hex")
                            })
                        }
                    }

                    return deserializer.deserialize_str(HexVisitor);
                }

                struct BytesVisitor;

                impl<'de> $crate::serde::de::Visitor<'de> for BytesVisitor {
                    type Value = $type;

                    fn expecting(
                        &self,
                        f: &mut core::fmt::Formatter,
                    ) -> core::fmt::Result {
                        write!(f, "a valid {}-byte encoding of a {}", $len, $name)
                    }

                    fn visit_seq<A>(self, mut seq: A) -> Result<$type, A::Error>
                    where A: $crate::serde::de::SeqAccess<'de> {

                        let mut $input = [0u8; $len];
                        for i in 0..$len {
                            $input[i] = seq.next_element()?
                            .ok_or_else(|| $crate::serde::de::Error::invalid_length(i, &self))?;
                        }

                        let result: Option<$type> = $block;
                        result.ok_or_else(|| $crate::serde::de::Error::custom(format_args!("invalid byte encoding, expected {}", &self as &dyn $crate::serde::de::Expected)))
                    }
                }

                deserializer.deserialize_tuple($len, BytesVisitor)
            }
        }

    };
}
