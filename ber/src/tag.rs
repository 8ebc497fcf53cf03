use std::fmt::{self, Display, Formatter};

pub const TAG_CLASS_MASK: u8 = 0xc0;
pub const TAG_CONSTRUCTED: u8 = 0x20;
pub const TAG_NUMBER_MASK: u8 = 0x1f;

/// The class bits of a tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Class {
    Universal,
    Application,
    ContextSpecific,
    Private,
}

impl From<u8> for Class {
    fn from(tag: u8) -> Self {
        match (tag & TAG_CLASS_MASK) >> 6 {
            0 => Class::Universal,
            1 => Class::Application,
            2 => Class::ContextSpecific,
            _ => Class::Private,
        }
    }
}

/// Universal tag numbers with a well-known name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum UniversalType {
    EndOfContents = 0x00,
    Boolean = 0x01,
    Integer = 0x02,
    BitString = 0x03,
    OctetString = 0x04,
    Null = 0x05,
    ObjectIdentifier = 0x06,
    ObjectDescriptor = 0x07,
    External = 0x08,
    Real = 0x09,
    Enumerated = 0x0a,
    EmbeddedPdv = 0x0b,
    UTF8String = 0x0c,
    Sequence = 0x10,
    Set = 0x11,
    NumericString = 0x12,
    PrintableString = 0x13,
    TeletexString = 0x14,
    VideotexString = 0x15,
    IA5String = 0x16,
    UTCTime = 0x17,
    GeneralizedTime = 0x18,
    GraphicString = 0x19,
    VisibleString = 0x1a,
    GeneralString = 0x1b,
    UniversalString = 0x1c,
    BMPString = 0x1e,
}

impl UniversalType {
    pub fn from_number(number: u8) -> Option<Self> {
        let ty = match number {
            0x00 => Self::EndOfContents,
            0x01 => Self::Boolean,
            0x02 => Self::Integer,
            0x03 => Self::BitString,
            0x04 => Self::OctetString,
            0x05 => Self::Null,
            0x06 => Self::ObjectIdentifier,
            0x07 => Self::ObjectDescriptor,
            0x08 => Self::External,
            0x09 => Self::Real,
            0x0a => Self::Enumerated,
            0x0b => Self::EmbeddedPdv,
            0x0c => Self::UTF8String,
            0x10 => Self::Sequence,
            0x11 => Self::Set,
            0x12 => Self::NumericString,
            0x13 => Self::PrintableString,
            0x14 => Self::TeletexString,
            0x15 => Self::VideotexString,
            0x16 => Self::IA5String,
            0x17 => Self::UTCTime,
            0x18 => Self::GeneralizedTime,
            0x19 => Self::GraphicString,
            0x1a => Self::VisibleString,
            0x1b => Self::GeneralString,
            0x1c => Self::UniversalString,
            0x1e => Self::BMPString,
            _ => return None,
        };
        Some(ty)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::EndOfContents => "EOC",
            Self::Boolean => "BOOLEAN",
            Self::Integer => "INTEGER",
            Self::BitString => "BIT_STRING",
            Self::OctetString => "OCTET_STRING",
            Self::Null => "NULL",
            Self::ObjectIdentifier => "OBJECT_IDENTIFIER",
            Self::ObjectDescriptor => "ObjectDescriptor",
            Self::External => "EXTERNAL",
            Self::Real => "REAL",
            Self::Enumerated => "ENUMERATED",
            Self::EmbeddedPdv => "EMBEDDED_PDV",
            Self::UTF8String => "UTF8String",
            Self::Sequence => "SEQUENCE",
            Self::Set => "SET",
            Self::NumericString => "NumericString",
            Self::PrintableString => "PrintableString",
            // aka T61String
            Self::TeletexString => "TeletexString",
            Self::VideotexString => "VideotexString",
            Self::IA5String => "IA5String",
            Self::UTCTime => "UTCTime",
            Self::GeneralizedTime => "GeneralizedTime",
            Self::GraphicString => "GraphicString",
            Self::VisibleString => "VisibleString",
            Self::GeneralString => "GeneralString",
            Self::UniversalString => "UniversalString",
            Self::BMPString => "BMPString",
        }
    }
}

/// A single-byte identifier octet.
///
/// High tag numbers (number bits all set, continued in following bytes)
/// are not expanded; such a tag reports number `0x1f`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(u8);

impl Tag {
    pub const END_OF_CONTENTS: Tag = Tag(0x00);
    pub const BIT_STRING: Tag = Tag(0x03);
    pub const OCTET_STRING: Tag = Tag(0x04);

    pub fn byte(&self) -> u8 {
        self.0
    }

    pub fn class(&self) -> Class {
        Class::from(self.0)
    }

    pub fn is_constructed(&self) -> bool {
        self.0 & TAG_CONSTRUCTED == TAG_CONSTRUCTED
    }

    pub fn number(&self) -> u8 {
        self.0 & TAG_NUMBER_MASK
    }

    pub fn is_end_of_contents(&self) -> bool {
        *self == Tag::END_OF_CONTENTS
    }

    pub fn universal_type(&self) -> Option<UniversalType> {
        match self.class() {
            Class::Universal => UniversalType::from_number(self.number()),
            _ => None,
        }
    }
}

impl From<u8> for Tag {
    fn from(value: u8) -> Self {
        Tag(value)
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let number = self.number();
        match self.class() {
            Class::Universal => match UniversalType::from_number(number) {
                Some(ty) => write!(f, "{}", ty.name()),
                None => write!(f, "Universal_{:x}", number),
            },
            Class::Application => write!(f, "Application_{:x}", number),
            Class::ContextSpecific => write!(f, "[{}]", number),
            Class::Private => write!(f, "Private_{:x}", number),
        }
    }
}

impl fmt::LowerHex for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
