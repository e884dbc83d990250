use kitchen::collections::Shared;
use kitchen::cooking::{
    BurningKey, BurningKind, Cooking, CookingDomain, CookingError, CookingState, FryingKey,
    FryingKind, StoveId,
};
use kitchen::holding::ObjectKey;

const RAW: ObjectKey = ObjectKey(1);
const FRIED: ObjectKey = ObjectKey(2);
const BURNED: ObjectKey = ObjectKey(3);

fn frying() -> Shared<FryingKind> {
    Shared::new(FryingKind {
        id: FryingKey(1),
        name: "raw->fried".to_string(),
        input: RAW,
        output: FRIED,
        duration: 5.0,
    })
}

fn burning() -> Shared<BurningKind> {
    Shared::new(BurningKind {
        id: BurningKey(1),
        name: "fried->burned".to_string(),
        input: FRIED,
        output: BURNED,
        duration: 3.0,
    })
}

fn domain_with_stove() -> (CookingDomain, StoveId) {
    let mut domain = CookingDomain::default();
    let id = domain.stoves_id.introduce().one(StoveId);
    let create = domain.create_stove(id).unwrap();
    create();
    (domain, id)
}

#[test]
fn test_idle_stove_does_not_progress() {
    let (mut domain, _) = domain_with_stove();
    assert_eq!(domain.update(10.0), vec![]);
}

#[test]
fn test_frying_then_burning_sequence() {
    let (mut domain, stove) = domain_with_stove();
    let start = domain.start_frying(stove, &frying(), Some(burning())).unwrap();
    start();

    assert_eq!(
        domain.update(2.0),
        vec![Cooking::StoveProgressChanged {
            stove,
            progress: 0.4
        }]
    );
    assert_eq!(
        domain.update(3.0),
        vec![
            Cooking::FryingCompleted {
                stove,
                output: FRIED
            },
            Cooking::StoveStateChanged {
                stove,
                state: CookingState::Fried
            },
            Cooking::StoveProgressChanged {
                stove,
                progress: 0.0
            },
        ]
    );
    assert_eq!(domain.get_stove(stove).unwrap().progress, 0.0);
    assert_eq!(
        domain.update(1.5),
        vec![
            Cooking::BurnWarning { stove },
            Cooking::StoveProgressChanged {
                stove,
                progress: 0.5
            },
        ]
    );
    assert_eq!(
        domain.update(1.5),
        vec![
            Cooking::BurningCompleted {
                stove,
                output: BURNED
            },
            Cooking::StoveStateChanged {
                stove,
                state: CookingState::Burned
            },
            Cooking::StoveProgressChanged {
                stove,
                progress: 0.0
            },
        ]
    );
    assert_eq!(domain.update(5.0), vec![]);
    assert_eq!(
        domain.get_stove(stove).unwrap().state,
        CookingState::Burned
    );
}

#[test]
fn test_burn_warning_fires_once() {
    let (mut domain, stove) = domain_with_stove();
    let start = domain.start_frying(stove, &frying(), Some(burning())).unwrap();
    start();
    domain.update(5.0);

    let mut warnings = 0;
    for _ in 0..5 {
        warnings += domain
            .update(0.5)
            .iter()
            .filter(|event| matches!(event, Cooking::BurnWarning { .. }))
            .count();
    }

    assert_eq!(warnings, 1);
}

#[test]
fn test_fried_item_without_burning_stays_fried() {
    let (mut domain, stove) = domain_with_stove();
    let start = domain.start_frying(stove, &frying(), None).unwrap();
    start();
    domain.update(5.0);

    assert_eq!(domain.update(100.0), vec![]);
    assert_eq!(domain.get_stove(stove).unwrap().state, CookingState::Fried);
}

#[test]
fn test_stop_cooking_loses_progress() {
    let (mut domain, stove) = domain_with_stove();
    let start = domain.start_frying(stove, &frying(), Some(burning())).unwrap();
    start();
    domain.update(4.0);

    let stop = domain.stop_cooking(stove).unwrap();
    stop();

    let current = domain.get_stove(stove).unwrap();
    assert_eq!(current.state, CookingState::Idle);
    assert_eq!(current.progress, 0.0);
    assert_eq!(domain.update(4.0), vec![]);
}

#[test]
fn test_busy_stove_rejects_frying() {
    let (mut domain, stove) = domain_with_stove();
    let start = domain.start_frying(stove, &frying(), None).unwrap();
    start();

    let result = domain.start_frying(stove, &frying(), None);

    assert_eq!(
        result.err(),
        Some(CookingError::StoveIsBusy {
            id: stove,
            state: CookingState::Frying
        })
    );
}

#[test]
fn test_unknown_stove() {
    let (domain, _) = domain_with_stove();
    assert_eq!(
        domain.get_stove(StoveId(42)).err(),
        Some(CookingError::StoveNotFound { id: StoveId(42) })
    );
}
