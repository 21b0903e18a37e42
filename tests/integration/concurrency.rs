//! Many callers racing for the same variant.

use std::sync::atomic::Ordering;
use std::sync::{Arc, Barrier};
use variant_resolve::config::CacheSettings;
use variant_resolve::model::ArtifactName;
use variant_resolve::resolver::{ComponentResolveState, VariantArtifactResolveState};
use variant_resolve::test_utils::ComponentBuilder;

const CALLERS: usize = 50;

fn shared_state() -> (Arc<ComponentResolveState>, Arc<std::sync::atomic::AtomicUsize>) {
    let (component, preparations) = ComponentBuilder::project(":lib")
        .configuration("apiElements")
        .artifact(ArtifactName::jar("lib-api"))
        .configuration("runtimeElements")
        .artifact(ArtifactName::jar("lib"))
        .build_counted();
    let settings = CacheSettings {
        initial_capacity: 4,
        shard_amount: Some(4),
    };
    (Arc::new(ComponentResolveState::with_settings(component, &settings)), preparations)
}

/// Fifty blocking callers released together all observe one published state.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_fifty_concurrent_callers_observe_one_instance() {
    let (state, preparations) = shared_state();
    let barrier = Arc::new(Barrier::new(CALLERS));
    let mut handles = Vec::with_capacity(CALLERS);

    for i in 0..CALLERS {
        let state = Arc::clone(&state);
        let barrier = Arc::clone(&barrier);
        handles.push(tokio::task::spawn_blocking(move || {
            let runtime = Arc::clone(state.metadata().configuration("runtimeElements").unwrap());
            barrier.wait();
            // Alternate entry points; both go through the same cache key.
            if i % 2 == 0 {
                state.resolve_artifacts_for(&runtime).unwrap()
            } else {
                state.prepare_for_artifact_resolution(&runtime).unwrap()
            }
        }));
    }

    let mut observed: Vec<Arc<VariantArtifactResolveState>> = Vec::with_capacity(CALLERS);
    for handle in handles {
        observed.push(handle.await.unwrap());
    }

    assert_eq!(observed.len(), CALLERS);
    assert!(observed.iter().all(|s| Arc::ptr_eq(s, &observed[0])));
    assert_eq!(state.cached_variant_count(), 1);
    assert_eq!(preparations.load(Ordering::SeqCst), 1);
}

/// Callers racing on two variants get exactly two states.
#[test]
fn test_racing_on_two_variants_builds_two_states() {
    let (state, preparations) = shared_state();
    let barrier = Barrier::new(CALLERS);

    let observed: Vec<(String, Arc<VariantArtifactResolveState>)> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..CALLERS)
            .map(|i| {
                let state = &state;
                let barrier = &barrier;
                scope.spawn(move || {
                    let name = if i % 2 == 0 { "apiElements" } else { "runtimeElements" };
                    let variant = Arc::clone(state.metadata().configuration(name).unwrap());
                    barrier.wait();
                    (name.to_string(), state.resolve_artifacts_for(&variant).unwrap())
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (name, handle) in &observed {
        let first = observed.iter().find(|(n, _)| n == name).map(|(_, s)| s).unwrap();
        assert!(Arc::ptr_eq(handle, first));
        assert_eq!(handle.variant().name(), name);
    }
    assert_eq!(state.cached_variant_count(), 2);
    assert_eq!(preparations.load(Ordering::SeqCst), 2);
}

/// Selection on a shared handle runs concurrently without touching the cache.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_selection_on_shared_handle() {
    use variant_resolve::model::ImmutableAttributes;
    use variant_resolve::selector::{AttributeMatchingSelector, ExcludeSpec};

    let (state, _) = shared_state();
    let runtime = Arc::clone(state.metadata().configuration("runtimeElements").unwrap());
    let handle = state.prepare_for_artifact_resolution(&runtime).unwrap();
    let selector = Arc::new(AttributeMatchingSelector::new());

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let handle = Arc::clone(&handle);
            let selector = Arc::clone(&selector);
            tokio::task::spawn_blocking(move || {
                let overrides = ImmutableAttributes::empty();
                handle
                    .resolve_artifacts(selector.as_ref(), &ExcludeSpec::Nothing, &overrides)
                    .map(|set| set.artifacts().len())
            })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap().unwrap(), 1);
    }
    assert_eq!(state.cached_variant_count(), 1);
}
