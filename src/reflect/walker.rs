use crate::reflect::{GenericDefinition, TypeDescriptor};

/// Walks from `candidate` towards the root and returns the first type that instantiates
/// `marker`, so the caller can read the arguments it was bound with.
///
/// Only an instantiation of exactly `marker` matches. A template with the same arguments
/// but another path, or the same path with another arity, is skipped.
pub fn find_generic_base<'a>(candidate: &'a TypeDescriptor, marker: &GenericDefinition) -> Option<&'a TypeDescriptor> {
    candidate
        .ancestors()
        .find(|ty| ty.definition() == Some(marker))
}

#[cfg(test)]
mod tests {
    use std::marker::PhantomData;

    use super::*;
    use crate::reflect::{described_template, Described};

    const MARKER: GenericDefinition = GenericDefinition::new("walker::Marker", 1);
    const LOOKALIKE: GenericDefinition = GenericDefinition::new("walker::Lookalike", 1);
    const WIDE_MARKER: GenericDefinition = GenericDefinition::new("walker::Marker", 2);

    struct Marker<T>(PhantomData<T>);
    struct Lookalike<T>(PhantomData<T>);
    struct Key;
    struct Direct;
    struct Middle;
    struct Leaf;
    struct Unrelated;
    struct Decoy;

    described_template!(MARKER => Marker<T>);
    described_template!(LOOKALIKE => Lookalike<T>);
    crate::described!(Key);
    crate::described!(Direct: Marker<Key>);
    crate::described!(Middle: Marker<String>);
    crate::described!(Leaf: Middle);
    crate::described!(Unrelated);
    crate::described!(Decoy: Lookalike<Key>);

    #[test]
    fn test_direct_base() {
        let direct = Direct::describe();
        let found = find_generic_base(&direct, &MARKER).unwrap();
        assert!(found.is::<Marker<Key>>());
        assert!(found.type_arguments()[0].is::<Key>());
    }

    #[test]
    fn test_transitive_base() {
        let leaf = Leaf::describe();
        let found = find_generic_base(&leaf, &MARKER).unwrap();
        assert!(found.is::<Marker<String>>());
    }

    #[test]
    fn test_candidate_itself_matches() {
        let marker = <Marker<Key>>::describe();
        let found = find_generic_base(&marker, &MARKER).unwrap();
        assert_eq!(found, &marker);
    }

    #[test]
    fn test_root_type_not_found() {
        assert!(find_generic_base(&Unrelated::describe(), &MARKER).is_none());
    }

    #[test]
    fn test_lookalike_template_not_found() {
        assert!(find_generic_base(&Decoy::describe(), &MARKER).is_none());
        assert!(find_generic_base(&Direct::describe(), &WIDE_MARKER).is_none());
        assert!(find_generic_base(&Decoy::describe(), &LOOKALIKE).is_some());
    }
}
