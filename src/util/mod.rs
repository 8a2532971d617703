mod unique_sequence;

pub(crate) use unique_sequence::UniqueSequence;
