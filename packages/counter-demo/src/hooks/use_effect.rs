use crate::{ComponentUpdater, Hook, Hooks};
use core::hash::{Hash, Hasher};
use std::hash::DefaultHasher;

mod private {
    pub trait Sealed {}
    impl Sealed for crate::Hooks<'_> {}
}

/// `UseEffect` is a hook that allows you to execute a function after each update pass.
///
/// It will execute after each pass if the dependency has changed. If you want to execute it
/// exactly once, after the first pass, you can provide `()` as the dependency.
///
/// Effects run after the component's output has been committed, so everything the component did
/// while rendering has already happened when the effect runs.
pub trait UseEffect: private::Sealed {
    /// Executes the given function after each update pass, if the dependency argument has changed.
    ///
    /// If you want to execute the function exactly once, after the first pass, you can provide
    /// `()` as the dependency.
    ///
    /// Changes to the dependencies are detected solely via the [`Hash`](std::hash::Hash) trait, so this
    /// function will hash them but not store them.
    ///
    /// To provide multiple dependencies, place your dependencies in a tuple.
    fn use_effect<F, D>(&mut self, f: F, deps: D)
    where
        F: FnOnce() + Send + Unpin + 'static,
        D: Hash;

    /// Like [`use_effect`](Self::use_effect), but the function returns a cleanup procedure.
    ///
    /// The cleanup runs before the effect runs again because its dependencies changed, and when
    /// the component is unmounted.
    fn use_effect_with_cleanup<F, C, D>(&mut self, f: F, deps: D)
    where
        F: FnOnce() -> C + Send + Unpin + 'static,
        C: FnOnce() + Send + 'static,
        D: Hash;
}

fn hash_deps<D: Hash>(deps: D) -> u64 {
    let mut hasher = DefaultHasher::new();
    deps.hash(&mut hasher);
    hasher.finish()
}

type Effect = Box<dyn FnOnce() -> Cleanup + Send>;
type Cleanup = Option<Box<dyn FnOnce() + Send>>;

impl UseEffect for Hooks<'_> {
    fn use_effect<F, D>(&mut self, f: F, deps: D)
    where
        F: FnOnce() + Send + Unpin + 'static,
        D: Hash,
    {
        self.use_hook(UseEffectImpl::default).schedule(
            Box::new(move || -> Cleanup {
                f();
                None
            }),
            hash_deps(deps),
        );
    }

    fn use_effect_with_cleanup<F, C, D>(&mut self, f: F, deps: D)
    where
        F: FnOnce() -> C + Send + Unpin + 'static,
        C: FnOnce() + Send + 'static,
        D: Hash,
    {
        self.use_hook(UseEffectImpl::default).schedule(
            Box::new(move || -> Cleanup { Some(Box::new(f())) }),
            hash_deps(deps),
        );
    }
}

#[derive(Default)]
struct UseEffectImpl {
    deps_hash: Option<u64>,
    f: Option<Effect>,
    cleanup: Cleanup,
}

impl UseEffectImpl {
    fn schedule(&mut self, f: Effect, deps_hash: u64) {
        if self.deps_hash != Some(deps_hash) {
            self.f = Some(f);
            self.deps_hash = Some(deps_hash);
        } else {
            self.f = None;
        }
    }

    fn run_cleanup(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

impl Hook for UseEffectImpl {
    fn post_component_update(&mut self, _updater: &mut ComponentUpdater) {
        if let Some(f) = self.f.take() {
            self.run_cleanup();
            self.cleanup = f();
        }
    }

    fn on_unmount(&mut self) {
        self.f = None;
        self.run_cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{hook::AnyHook, Element};
    use std::sync::{Arc, Mutex};

    type Log = Arc<Mutex<Vec<String>>>;

    fn pass(storage: &mut Vec<Box<dyn AnyHook>>, first: bool, log: &Log, dep: u32) {
        let mut hooks = Hooks::new(storage, first);
        hooks.use_effect_with_cleanup(
            {
                let log = log.clone();
                move || {
                    log.lock().unwrap().push(format!("run {}", dep));
                    let log = log.clone();
                    move || log.lock().unwrap().push(format!("cleanup {}", dep))
                }
            },
            dep,
        );
        let mut children: Vec<Element> = Vec::new();
        storage.post_component_update(&mut ComponentUpdater::new(&mut children));
    }

    #[test]
    fn test_effect_runs_on_dep_change() {
        let log = Log::default();
        let mut storage: Vec<Box<dyn AnyHook>> = Vec::new();

        pass(&mut storage, true, &log, 1);
        pass(&mut storage, false, &log, 1);
        pass(&mut storage, false, &log, 2);
        pass(&mut storage, false, &log, 2);
        storage.on_unmount();
        storage.on_unmount();

        assert_eq!(
            *log.lock().unwrap(),
            vec!["run 1", "cleanup 1", "run 2", "cleanup 2"]
        );
    }

    #[test]
    fn test_effect_without_cleanup_runs_once() {
        let runs = Arc::new(Mutex::new(0));
        let mut storage: Vec<Box<dyn AnyHook>> = Vec::new();
        for first in [true, false, false] {
            let mut hooks = Hooks::new(&mut storage, first);
            let runs = runs.clone();
            hooks.use_effect(move || *runs.lock().unwrap() += 1, ());
            let mut children: Vec<Element> = Vec::new();
            storage.post_component_update(&mut ComponentUpdater::new(&mut children));
        }
        storage.on_unmount();
        assert_eq!(*runs.lock().unwrap(), 1);
    }
}
