use crate::{PendingPurchasesParams, PendingPurchasesParamsBuilder};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Step {
    OneTime,
    Prepaid,
}

use Step::{OneTime, Prepaid};

impl Step {
    fn apply(self, builder: PendingPurchasesParamsBuilder) -> PendingPurchasesParamsBuilder {
        match self {
            Step::OneTime => builder.enable_one_time_products(),
            Step::Prepaid => builder.enable_prepaid_plans(),
        }
    }
}

fn build_with(steps: &[Step]) -> Option<PendingPurchasesParams> {
    steps
        .iter()
        .fold(PendingPurchasesParams::new_builder(), |builder, step| {
            step.apply(builder)
        })
        .build()
}

fn flags(params: PendingPurchasesParams) -> (bool, bool) {
    (params.enable_one_time_products(), params.enable_prepaid_plans())
}

#[test]
fn untouched_builder_builds_nothing() {
    assert_eq!(PendingPurchasesParams::new_builder().build(), None);
}

#[test]
fn prepaid_plans_alone_build_nothing() {
    assert_eq!(build_with(&[Prepaid]), None);
    assert_eq!(build_with(&[Prepaid, Prepaid, Prepaid]), None);
}

#[test]
fn one_time_products_alone() {
    let params = PendingPurchasesParams::new_builder()
        .enable_one_time_products()
        .build()
        .expect("one-time products were enabled");

    assert_eq!(flags(params), (true, false));
}

#[test]
fn one_time_products_and_prepaid_plans() {
    let params = PendingPurchasesParams::new_builder()
        .enable_one_time_products()
        .enable_prepaid_plans()
        .build()
        .expect("one-time products were enabled");

    assert_eq!(flags(params), (true, true));
}

#[test]
fn toggle_order_does_not_matter() {
    let forwards = PendingPurchasesParams::new_builder()
        .enable_one_time_products()
        .enable_prepaid_plans()
        .build();
    let backwards = PendingPurchasesParams::new_builder()
        .enable_prepaid_plans()
        .enable_one_time_products()
        .build();

    assert!(forwards.is_some());
    assert_eq!(forwards, backwards);
}

#[test]
fn builds_iff_one_time_products_were_enabled() {
    let sequences: &[&[Step]] = &[
        &[],
        &[OneTime],
        &[Prepaid],
        &[OneTime, OneTime],
        &[Prepaid, OneTime],
        &[OneTime, Prepaid],
        &[Prepaid, Prepaid, OneTime],
        &[OneTime, Prepaid, OneTime, Prepaid],
        &[Prepaid, Prepaid],
    ];

    for steps in sequences {
        let one_time = steps.iter().any(|step| *step == OneTime);
        let prepaid = steps.iter().any(|step| *step == Prepaid);

        match build_with(steps) {
            Some(params) => {
                assert!(one_time, "built without one-time products: {:?}", steps);
                assert_eq!(flags(params), (true, prepaid));
            }
            None => assert!(!one_time, "nothing was built from {:?}", steps),
        }
    }
}

fn java_setters(steps: &[Step]) -> Vec<&'static str> {
    build_with(steps)
        .expect("one-time products were enabled")
        .java_setters()
        .collect()
}

#[test]
fn java_builder_always_enables_one_time_products() {
    assert_eq!(java_setters(&[OneTime]), ["enableOneTimeProducts"]);
    assert_eq!(java_setters(&[OneTime, OneTime]), ["enableOneTimeProducts"]);
}

#[test]
fn java_builder_enables_prepaid_plans_only_when_set() {
    let expected = ["enableOneTimeProducts", "enablePrepaidPlans"];

    assert_eq!(java_setters(&[OneTime, Prepaid]), expected);
    assert_eq!(java_setters(&[Prepaid, OneTime]), expected);
    assert_eq!(java_setters(&[Prepaid, OneTime, Prepaid]), expected);
}
