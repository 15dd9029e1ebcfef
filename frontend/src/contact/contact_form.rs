use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::future::{abortable, select, AbortHandle, Either};
use futures::FutureExt;
use futures_signals::signal::Mutable;

use shared::errors::InputError;
use shared::types::{ContactMessage, FormField, FormState, SubmissionStatus};
use shared::utils::validate;

use crate::config::ContactSettings;
use crate::contact::runtime::Runtime;
use crate::contact::transport::Transport;
use crate::state::ModalState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Honeypot was filled; nothing happens and nothing is shown.
    Dropped,
    /// Pre-flight failure, to be shown as a blocking alert.
    Rejected(InputError),
    /// A submission is already in flight.
    Busy,
    /// This visit already delivered a message.
    AlreadySent,
    /// The dialog session ended while the transport was still running.
    Stale,
    Settled(SubmissionStatus),
}

/// State and submission pipeline of one contact dialog.
pub struct ContactForm {
    pub fields: Mutable<FormState>,
    pub honeypot: Mutable<String>,
    pub status: Mutable<SubmissionStatus>,
    pub submitted: Mutable<bool>,
    modal: ModalState,
    settings: ContactSettings,
    runtime: Rc<dyn Runtime>,
    transport: Rc<dyn Transport>,
    session: Cell<u64>,
    pending: RefCell<Option<AbortHandle>>,
}

impl ContactForm {
    pub fn new(modal: ModalState, settings: ContactSettings, runtime: Rc<dyn Runtime>, transport: Rc<dyn Transport>) -> Self {
        Self {
            fields: Mutable::new(FormState::default()),
            honeypot: Mutable::new(String::new()),
            status: Mutable::new(SubmissionStatus::Idle),
            submitted: Mutable::new(false),
            modal,
            settings,
            runtime,
            transport,
            session: Cell::new(0),
            pending: RefCell::new(None),
        }
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn on_field_change(&self, field: FormField, value: String) {
        self.fields.lock_mut().set(field, value);
    }

    pub fn on_honeypot_change(&self, value: String) {
        self.honeypot.set_neq(value);
    }

    /// Starts a fresh dialog session and shows the dialog.
    pub fn open(&self) {
        if self.modal.is_open() {
            return;
        }
        self.close_session();
        self.reset_fields();
        self.status.set_neq(SubmissionStatus::Idle);
        self.modal.toggle();
    }

    /// Ends the current session: scheduled actions are dropped and an
    /// in-flight dispatch will no longer write its result.
    pub fn close_session(&self) {
        self.session.set(self.session.get() + 1);
        self.cancel_pending();
    }

    /// The "Cancel" button. Refused while a submission is in flight.
    pub fn cancel(&self) -> bool {
        if self.status.get().is_sending() {
            return false;
        }
        self.close_session();
        self.reset_fields();
        if self.modal.is_open() {
            self.modal.toggle();
        }
        true
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let message = match self.preflight() {
            Ok(message) => message,
            Err(outcome) => return outcome,
        };

        self.cancel_pending();
        let session = self.session.get();
        self.status.set(SubmissionStatus::Sending);
        log::info!("contact: sending, timeout {}ms", self.settings.timeout_ms);

        let send = self.transport.send(message);
        let timer = self.runtime.sleep(self.settings.timeout_ms);
        let status = match select(send, timer).await {
            Either::Left((Ok(()), _)) => SubmissionStatus::Success,
            Either::Left((Err(err), _)) => {
                log::warn!("contact: transport failed: {}", err);
                SubmissionStatus::Error
            }
            Either::Right(_) => {
                log::warn!("contact: no answer within {}ms", self.settings.timeout_ms);
                SubmissionStatus::Timeout
            }
        };

        if self.session.get() != session {
            // the relay may still have delivered; `submitted` is not set
            log::warn!("contact: dialog closed before the transport settled ({:?}), result discarded", status);
            return SubmitOutcome::Stale;
        }

        self.status.set(status);
        match status {
            SubmissionStatus::Success => {
                self.submitted.set(true);
                self.schedule_close();
            }
            status if status.reverts() => self.schedule_revert(),
            _ => {}
        }
        SubmitOutcome::Settled(status)
    }

    fn preflight(&self) -> Result<ContactMessage, SubmitOutcome> {
        if self.status.get().is_sending() {
            return Err(SubmitOutcome::Busy);
        }
        if self.submitted.get() {
            return Err(SubmitOutcome::AlreadySent);
        }
        if !self.honeypot.lock_ref().is_empty() {
            log::info!("contact: honeypot filled, submission dropped");
            return Err(SubmitOutcome::Dropped);
        }

        let message = self.fields.lock_ref().sanitized();
        validate(&message).map_err(SubmitOutcome::Rejected)?;
        Ok(message)
    }

    fn reset_fields(&self) {
        self.fields.set(FormState::default());
        self.honeypot.set_neq(String::new());
    }

    fn schedule_revert(&self) {
        let status = self.status.clone();
        self.schedule(self.settings.revert_ms, move || {
            status.set(SubmissionStatus::Idle);
        });
    }

    fn schedule_close(&self) {
        let fields = self.fields.clone();
        let honeypot = self.honeypot.clone();
        let status = self.status.clone();
        let modal = self.modal.clone();
        self.schedule(self.settings.close_ms, move || {
            fields.set(FormState::default());
            honeypot.set_neq(String::new());
            status.set(SubmissionStatus::Idle);
            if modal.is_open() {
                modal.toggle();
            }
        });
    }

    fn schedule<F>(&self, delay_ms: u32, action: F)
        where F: FnOnce() + 'static
    {
        let delay = self.runtime.sleep(delay_ms);
        let (task, handle) = abortable(async move {
            delay.await;
            action();
        });
        self.cancel_pending();
        *self.pending.borrow_mut() = Some(handle);
        self.runtime.spawn(async move {
            if task.await.is_err() {
                log::debug!("contact: scheduled action canceled");
            }
        }.boxed_local());
    }

    fn cancel_pending(&self) {
        if let Some(handle) = self.pending.borrow_mut().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use futures::future::{self, LocalBoxFuture};
    use tokio::task::LocalSet;
    use tokio::time::{sleep, Instant};

    use shared::errors::TransportError;

    use super::*;

    struct TokioRuntime;

    impl Runtime for TokioRuntime {
        fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
            tokio::task::spawn_local(task);
        }

        fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()> {
            sleep(Duration::from_millis(millis.into())).boxed_local()
        }
    }

    #[derive(Clone)]
    enum Plan {
        After(u64, Result<(), TransportError>),
        Fail(TransportError),
        Never,
    }

    struct FakeTransport {
        plan: Plan,
        sent: RefCell<Vec<ContactMessage>>,
    }

    impl FakeTransport {
        fn new(plan: Plan) -> Rc<Self> {
            Rc::new(Self { plan, sent: RefCell::new(vec![]) })
        }

        fn calls(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    impl Transport for FakeTransport {
        fn send(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<(), TransportError>> {
            self.sent.borrow_mut().push(message);
            match self.plan.clone() {
                Plan::After(millis, result) => async move {
                    sleep(Duration::from_millis(millis)).await;
                    result
                }.boxed_local(),
                Plan::Fail(err) => future::ready(Err(err)).boxed_local(),
                Plan::Never => future::pending().boxed_local(),
            }
        }
    }

    fn fixture(plan: Plan, timeout_ms: u32) -> (Rc<ContactForm>, Rc<FakeTransport>) {
        let transport = FakeTransport::new(plan);
        let settings = ContactSettings { timeout_ms, ..ContactSettings::default() };
        let form = ContactForm::new(ModalState::new(), settings, Rc::new(TokioRuntime), transport.clone());
        form.open();
        fill(&form);
        (Rc::new(form), transport)
    }

    fn fill(form: &ContactForm) {
        form.on_field_change(FormField::UserEmail, "visitor@example.com".to_string());
        form.on_field_change(FormField::UserName, "Visitor".to_string());
        form.on_field_change(FormField::Subject, "Hello".to_string());
        form.on_field_change(FormField::Message, "Nice page, let's talk.".to_string());
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[tokio::test(start_paused = true)]
    async fn honeypot_drops_without_dispatch() {
        LocalSet::new().run_until(async {
            let (form, transport) = fixture(Plan::Never, 9000);
            form.on_honeypot_change("http://spam.example".to_string());

            assert_eq!(form.submit().await, SubmitOutcome::Dropped);
            assert_eq!(transport.calls(), 0);
            assert_eq!(form.status.get(), SubmissionStatus::Idle);
            assert!(form.modal().is_open());
        }).await;
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_email_is_rejected_before_dispatch() {
        LocalSet::new().run_until(async {
            let (form, transport) = fixture(Plan::Never, 9000);
            form.on_field_change(FormField::UserEmail, "visitor-at-example".to_string());

            assert_eq!(form.submit().await, SubmitOutcome::Rejected(InputError::InvalidEmail));
            assert_eq!(transport.calls(), 0);
            assert_eq!(form.status.get(), SubmissionStatus::Idle);
        }).await;
    }

    #[tokio::test(start_paused = true)]
    async fn message_length_is_measured_after_sanitizing() {
        LocalSet::new().run_until(async {
            let (form, transport) = fixture(Plan::Never, 9000);
            form.on_field_change(FormField::Message, "<strong>hi</strong> there".to_string());

            assert_eq!(
                form.submit().await,
                SubmitOutcome::Rejected(InputError::MessageTooShort { min: 10 })
            );
            assert_eq!(transport.calls(), 0);
        }).await;
    }

    #[tokio::test(start_paused = true)]
    async fn transport_receives_sanitized_copy() {
        LocalSet::new().run_until(async {
            let (form, transport) = fixture(Plan::After(10, Ok(())), 9000);
            form.on_field_change(FormField::Subject, "<i>Hello</i>".to_string());

            form.submit().await;

            let sent = transport.sent.borrow();
            assert_eq!(sent[0].subject, "Hello");
            assert_eq!(sent[0].user_email, "visitor@example.com");
            assert_eq!(form.fields.lock_ref().subject, "<i>Hello</i>");
        }).await;
    }

    #[tokio::test(start_paused = true)]
    async fn fast_transport_beats_timeout() {
        LocalSet::new().run_until(async {
            let (form, transport) = fixture(Plan::After(500, Ok(())), 9000);
            let start = Instant::now();

            assert_eq!(form.submit().await, SubmitOutcome::Settled(SubmissionStatus::Success));
            assert!(start.elapsed() < ms(9000));
            assert_eq!(transport.calls(), 1);
            assert!(form.submitted.get());

            // the losing timer must not flip the status later
            sleep(ms(9000)).await;
            assert_ne!(form.status.get(), SubmissionStatus::Timeout);
        }).await;
    }

    #[tokio::test(start_paused = true)]
    async fn hanging_transport_times_out_then_reverts() {
        LocalSet::new().run_until(async {
            let (form, _) = fixture(Plan::Never, 100);
            let start = Instant::now();

            assert_eq!(form.submit().await, SubmitOutcome::Settled(SubmissionStatus::Timeout));
            let elapsed = start.elapsed();
            assert!(elapsed >= ms(100) && elapsed < ms(150), "{:?}", elapsed);

            sleep(ms(2950)).await;
            assert_eq!(form.status.get(), SubmissionStatus::Timeout);

            sleep(ms(100)).await;
            assert_eq!(form.status.get(), SubmissionStatus::Idle);
            assert!(!form.submitted.get());
            assert!(form.modal().is_open());
        }).await;
    }

    #[tokio::test(start_paused = true)]
    async fn transport_error_reverts_to_idle() {
        LocalSet::new().run_until(async {
            let failure = TransportError::Rejected { status: 400, text: "bad".to_string() };
            let (form, _) = fixture(Plan::Fail(failure), 9000);

            assert_eq!(form.submit().await, SubmitOutcome::Settled(SubmissionStatus::Error));

            sleep(ms(2950)).await;
            assert_eq!(form.status.get(), SubmissionStatus::Error);

            sleep(ms(100)).await;
            assert_eq!(form.status.get(), SubmissionStatus::Idle);
        }).await;
    }

    #[tokio::test(start_paused = true)]
    async fn success_resets_and_closes_after_delay() {
        LocalSet::new().run_until(async {
            let (form, _) = fixture(Plan::After(500, Ok(())), 9000);

            form.submit().await;
            assert_eq!(form.status.get(), SubmissionStatus::Success);

            sleep(ms(1950)).await;
            assert!(form.modal().is_open());
            assert!(!form.fields.lock_ref().is_empty());

            sleep(ms(100)).await;
            assert!(form.fields.lock_ref().is_empty());
            assert!(!form.modal().is_open());
            assert_eq!(form.status.get(), SubmissionStatus::Idle);
        }).await;
    }

    #[tokio::test(start_paused = true)]
    async fn one_message_per_visit() {
        LocalSet::new().run_until(async {
            let (form, transport) = fixture(Plan::After(10, Ok(())), 9000);
            form.submit().await;
            sleep(ms(2100)).await;

            form.open();
            fill(&form);
            assert_eq!(form.submit().await, SubmitOutcome::AlreadySent);
            assert_eq!(transport.calls(), 1);
        }).await;
    }

    #[tokio::test(start_paused = true)]
    async fn no_second_dispatch_or_cancel_while_sending() {
        LocalSet::new().run_until(async {
            let (form, transport) = fixture(Plan::Never, 9000);
            let first = tokio::task::spawn_local({
                let form = form.clone();
                async move { form.submit().await }
            });
            sleep(ms(10)).await;
            assert_eq!(form.status.get(), SubmissionStatus::Sending);

            assert_eq!(form.submit().await, SubmitOutcome::Busy);
            assert!(!form.cancel());
            assert!(form.modal().is_open());
            assert!(!form.fields.lock_ref().is_empty());
            assert_eq!(transport.calls(), 1);

            assert_eq!(first.await.unwrap(), SubmitOutcome::Settled(SubmissionStatus::Timeout));
        }).await;
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_while_idle_resets_and_closes() {
        LocalSet::new().run_until(async {
            let (form, transport) = fixture(Plan::Never, 9000);
            form.on_honeypot_change("x".to_string());

            assert!(form.cancel());
            assert!(form.fields.lock_ref().is_empty());
            assert!(form.honeypot.lock_ref().is_empty());
            assert!(!form.modal().is_open());
            assert_eq!(form.status.get(), SubmissionStatus::Idle);
            assert_eq!(transport.calls(), 0);
        }).await;
    }

    #[tokio::test(start_paused = true)]
    async fn closed_session_ignores_late_result() {
        LocalSet::new().run_until(async {
            let (form, _) = fixture(Plan::After(500, Ok(())), 9000);
            let pending = tokio::task::spawn_local({
                let form = form.clone();
                async move { form.submit().await }
            });
            sleep(ms(10)).await;
            form.close_session();

            assert_eq!(pending.await.unwrap(), SubmitOutcome::Stale);
            assert!(!form.submitted.get());
        }).await;
    }

    #[tokio::test(start_paused = true)]
    async fn closed_session_drops_scheduled_revert() {
        LocalSet::new().run_until(async {
            let (form, _) = fixture(Plan::Never, 100);
            form.submit().await;
            form.close_session();

            sleep(ms(4000)).await;
            assert_eq!(form.status.get(), SubmissionStatus::Timeout);

            form.modal().toggle();
            form.open();
            assert_eq!(form.status.get(), SubmissionStatus::Idle);
            assert!(form.modal().is_open());
        }).await;
    }
}
