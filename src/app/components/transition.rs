use dioxus::prelude::*;

/// Class sets applied during each half of a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionClasses {
    pub enter: &'static str,
    pub enter_from: &'static str,
    pub enter_to: &'static str,
    pub leave: &'static str,
    pub leave_from: &'static str,
    pub leave_to: &'static str,
}

/// Mount/unmount lifecycle of transitioned content.
///
/// `Hidden` is the only phase in which the content is not mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    Hidden,
    EnterFrom,
    EnterTo,
    Shown,
    LeaveFrom,
    LeaveTo,
}

impl TransitionPhase {
    pub fn initial(show: bool, appear: bool) -> Self {
        match (show, appear) {
            (true, true) => TransitionPhase::EnterFrom,
            (true, false) => TransitionPhase::Shown,
            (false, _) => TransitionPhase::Hidden,
        }
    }

    /// React to the `show` flag changing. Reversing mid-transition restarts
    /// the opposite half from its first frame.
    pub fn toggle(self, show: bool) -> Self {
        use TransitionPhase::*;
        match (show, self) {
            (true, Hidden | LeaveFrom | LeaveTo) => EnterFrom,
            (false, EnterFrom | EnterTo | Shown) => LeaveFrom,
            (_, phase) => phase,
        }
    }

    pub fn advance(self) -> Self {
        use TransitionPhase::*;
        match self {
            EnterFrom => EnterTo,
            EnterTo => Shown,
            LeaveFrom => LeaveTo,
            LeaveTo => Hidden,
            settled => settled,
        }
    }

    pub fn is_mounted(self) -> bool {
        self != TransitionPhase::Hidden
    }

    pub fn is_settled(self) -> bool {
        matches!(self, TransitionPhase::Hidden | TransitionPhase::Shown)
    }

    pub fn class_names(self, classes: &TransitionClasses) -> String {
        let parts: [&str; 2] = match self {
            TransitionPhase::EnterFrom => [classes.enter, classes.enter_from],
            TransitionPhase::EnterTo => [classes.enter, classes.enter_to],
            TransitionPhase::LeaveFrom => [classes.leave, classes.leave_from],
            TransitionPhase::LeaveTo => [classes.leave, classes.leave_to],
            TransitionPhase::Hidden | TransitionPhase::Shown => ["", ""],
        };
        join_classes(&parts)
    }
}

/// Space-separated class list, skipping empty entries
pub fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(target_arch = "wasm32")]
async fn wait_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

// No paint to wait for outside the browser
#[cfg(not(target_arch = "wasm32"))]
async fn wait_ms(_ms: u32) {}

const FRAME_MS: u32 = 16;

/// Mounts `children` while `show` is true, applying the enter classes on
/// the way in and the leave classes on the way out.
#[component]
pub fn Transition(
    show: bool,
    classes: TransitionClasses,
    /// Run the enter transition on first mount when `show` starts true
    #[props(default = false)]
    appear: bool,
    #[props(default = "")] class: &'static str,
    #[props(default = 200)] enter_ms: u32,
    #[props(default = 150)] leave_ms: u32,
    children: Element,
) -> Element {
    let mut phase = use_signal(|| TransitionPhase::initial(show, appear));
    let mut generation = use_signal(|| 0u64);

    use_effect(use_reactive((&show,), move |(show,)| {
        let current = *phase.peek();
        let next = current.toggle(show);
        if next == current && next.is_settled() {
            return;
        }
        phase.set(next);

        let run = *generation.peek() + 1;
        generation.set(run);
        let duration = if show { enter_ms } else { leave_ms };

        spawn(async move {
            wait_ms(FRAME_MS).await;
            if *generation.peek() != run {
                return;
            }
            let from = *phase.peek();
            phase.set(from.advance());

            wait_ms(duration).await;
            if *generation.peek() != run {
                return;
            }
            let from = *phase.peek();
            phase.set(from.advance());
        });
    }));

    let current = phase();
    if !current.is_mounted() {
        return rsx! {};
    }

    let phase_classes = current.class_names(&classes);
    let class_list = join_classes(&[class, &phase_classes]);
    rsx! {
        div { class: "{class_list}",
            {children}
        }
    }
}
