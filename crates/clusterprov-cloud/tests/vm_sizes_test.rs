use clusterprov_cloud::BASIC_VM_PREFIX;
use clusterprov_cloud::client::usable_vm_sizes;
use proptest::prelude::*;

proptest! {
    #[test]
    fn usable_sizes_never_start_with_basic_prefix(
        names in prop::collection::vec("(Basic_|Standard_)?[A-Za-z0-9_]{0,12}", 0..32)
    ) {
        let usable = usable_vm_sizes(names.clone());

        prop_assert!(usable.iter().all(|n| !n.starts_with(BASIC_VM_PREFIX)));
        let expected = names.iter().filter(|n| !n.starts_with("Basic_")).count();
        prop_assert_eq!(usable.len(), expected);
    }

    #[test]
    fn usable_sizes_preserve_order(
        names in prop::collection::vec("Standard_[A-Z][0-9]{1,2}", 0..16)
    ) {
        prop_assert_eq!(usable_vm_sizes(names.clone()), names);
    }
}

#[test]
fn prefix_match_is_case_sensitive() {
    let sizes = usable_vm_sizes(vec!["basic_A0".to_owned(), "Basic_A0".to_owned()]);
    assert_eq!(sizes, vec!["basic_A0"]);
}
