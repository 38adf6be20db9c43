//! Setup dialogue state machine
//!
//! Speak a question, listen once it has been spoken, record the answer, and
//! move on; re-ask when the no-response window elapses; hand the answers to
//! the generation gateway after the last question.

use crate::dialogue::answers::SetupAnswers;
use crate::dialogue::config::DialogueConfig;
use crate::dialogue::host::{Scheduled, SessionHost};
use crate::dialogue::script::{
    SetupScript, FAILURE_ANNOUNCEMENT, GENERATING_ANNOUNCEMENT, SUCCESS_ANNOUNCEMENT,
};
use crate::dialogue::state::{CallStatus, DialoguePhase};
use crate::dialogue::timer::{NoResponseTimer, TimerTicket};
use crate::gateway::{GenerationOutcome, GenerationRequest};
use crate::messages::{Speaker, TranscriptLog};
use crate::session::UserProfile;
use crate::speech::{AdapterEvent, SpeechAdapter, SpeechBackend, SpeechEvent};
use tracing::{debug, info, warn};

pub struct SetupController<B: SpeechBackend, H: SessionHost> {
    config: DialogueConfig,
    script: SetupScript,
    user: UserProfile,
    speech: SpeechAdapter<B>,
    host: H,
    timer: NoResponseTimer,
    transcript: TranscriptLog,
    answers: SetupAnswers,
    phase: DialoguePhase,
    call_status: CallStatus,
    index: usize,
    /// Set while an utterance is being handled; cleared when the next
    /// listening cycle starts or recognition fails.
    processing: bool,
    /// Listening has been started for the current question and no answer
    /// has arrived yet.
    awaiting_answer: bool,
    generation_requested: bool,
    navigation_scheduled: bool,
    navigated: bool,
}

impl<B: SpeechBackend, H: SessionHost> SetupController<B, H> {
    pub fn new(config: DialogueConfig, user: UserProfile, backend: B, host: H) -> Self {
        let script = SetupScript::for_user(&user.user_name);
        Self::with_script(config, script, user, backend, host)
    }

    pub fn with_script(
        config: DialogueConfig,
        script: SetupScript,
        user: UserProfile,
        backend: B,
        host: H,
    ) -> Self {
        let timer = NoResponseTimer::new(config.no_response_window);
        Self {
            config,
            script,
            user,
            speech: SpeechAdapter::new(backend),
            host,
            timer,
            transcript: TranscriptLog::new(),
            answers: SetupAnswers::new(),
            phase: DialoguePhase::Setup,
            call_status: CallStatus::Inactive,
            index: 0,
            processing: false,
            awaiting_answer: false,
            generation_requested: false,
            navigation_scheduled: false,
            navigated: false,
        }
    }

    /// Begin connecting a call
    pub fn start_call(&mut self) {
        if !self.call_status.can_start() {
            warn!("Call already {}, ignoring start request", self.call_status);
            return;
        }
        info!("Connecting call for user {}", self.user.user_id);
        self.call_status = CallStatus::Connecting;
        self.host
            .schedule(self.config.connect_delay, Scheduled::Connected);
    }

    /// End the call immediately: stop listening, cancel speech, clear the
    /// timer and go to FINISHED.
    pub fn disconnect(&mut self) {
        info!("Disconnecting call");
        self.speech.stop_listening();
        self.speech.cancel_speech();
        self.timer.cancel();
        self.awaiting_answer = false;
        self.call_status = CallStatus::Finished;
        self.phase = DialoguePhase::Finished;
        self.schedule_navigation();
    }

    /// Handle a raw speech backend event
    pub fn on_speech_event(&mut self, event: SpeechEvent) {
        match self.speech.filter(event) {
            None => {}
            Some(AdapterEvent::SpeechEnded) => self.after_speech(),
            Some(AdapterEvent::FinalUtterance(text)) => self.on_utterance(text),
            Some(AdapterEvent::RecognitionFailed(error)) => {
                debug!("Recognition failed ({}), waiting for the timer", error);
                self.processing = false;
            }
        }
    }

    /// Handle a task previously handed to `SessionHost::schedule`
    pub fn on_scheduled(&mut self, task: Scheduled) {
        debug!("Scheduled task: {:?}", task);
        match task {
            Scheduled::Connected => {
                if self.call_status != CallStatus::Connecting {
                    return;
                }
                self.call_status = CallStatus::Active;
                self.begin_setup();
            }
            Scheduled::SpeakQuestion(index) => {
                if !self.in_setup() || index != self.index {
                    debug!("Dropping stale question {}", index);
                    return;
                }
                self.speak_question(index);
            }
            Scheduled::ReAsk(index) => {
                if !self.in_setup() || index != self.index || self.processing {
                    debug!("Dropping stale re-ask {}", index);
                    return;
                }
                self.re_ask();
            }
            Scheduled::SubmitGeneration => self.submit_generation(),
            Scheduled::AnnounceSuccess => {
                if self.phase != DialoguePhase::Generating {
                    return;
                }
                self.say(SUCCESS_ANNOUNCEMENT, true);
                self.host
                    .schedule(self.config.announcement_grace, Scheduled::Finish);
            }
            Scheduled::Finish => self.finish(),
            Scheduled::Navigate => self.navigate(),
            Scheduled::NoResponse(ticket) => self.on_no_response(ticket),
        }
    }

    /// Handle the result of the generation request
    pub fn on_generation_finished(&mut self, outcome: GenerationOutcome) {
        if self.phase != DialoguePhase::Generating {
            debug!("Generation finished after the session ended, ignoring");
            return;
        }
        match outcome {
            Ok(response) => {
                info!(
                    "Interview generated: id={:?}, questions={:?}",
                    response.interview_id, response.questions_count
                );
                self.host.schedule(
                    self.config.success_announcement_delay,
                    Scheduled::AnnounceSuccess,
                );
            }
            Err(e) => {
                warn!("Failed to generate interview: {}", e);
                self.say(FAILURE_ANNOUNCEMENT, true);
                self.host
                    .schedule(self.config.announcement_grace, Scheduled::Finish);
            }
        }
    }

    /// Record `answer` for the current question and move on.
    ///
    /// Returns `false` without changing state outside SETUP or once the
    /// generation request has been made.
    pub fn advance(&mut self, answer: &str) -> bool {
        if self.phase != DialoguePhase::Setup || self.generation_requested {
            warn!("advance called in phase {}, ignoring", self.phase);
            return false;
        }
        if self.index >= self.script.len() {
            return false;
        }

        debug!("Current index: {}, answer: \"{}\"", self.index, answer);
        if let Some(key) = self.script.key_at(self.index) {
            if let Err(e) = self.answers.record(key, answer) {
                warn!("{}", e);
            }
        }
        self.index += 1;

        if self.index < self.script.len() {
            self.host.schedule(
                self.config.follow_up_delay,
                Scheduled::SpeakQuestion(self.index),
            );
        } else {
            info!("Setup complete: {:?}", self.answers);
            self.phase = DialoguePhase::Generating;
            self.speech.stop_listening();
            self.timer.cancel();
            self.host
                .schedule(self.config.follow_up_delay, Scheduled::SubmitGeneration);
        }
        true
    }

    /// Speak the current question again, prefixed with an apology.
    /// Does not touch the index, the answers, or the transcript.
    pub fn re_ask(&mut self) {
        if let Some(prompt) = self.script.reask_prompt(self.index) {
            info!("Re-asking question {}", self.index);
            self.say(&prompt, false);
        }
    }

    /// Transition to FINISHED and schedule navigation. Idempotent.
    pub fn finish(&mut self) {
        if self.phase == DialoguePhase::Finished && self.navigation_scheduled {
            return;
        }
        info!("Setup finished");
        self.speech.stop_listening();
        self.timer.cancel();
        self.awaiting_answer = false;
        self.phase = DialoguePhase::Finished;
        self.call_status = CallStatus::Finished;
        self.schedule_navigation();
    }

    fn in_setup(&self) -> bool {
        self.phase == DialoguePhase::Setup && self.call_status == CallStatus::Active
    }

    fn begin_setup(&mut self) {
        self.phase = DialoguePhase::Setup;
        self.index = 0;
        self.speak_question(0);
    }

    fn speak_question(&mut self, index: usize) {
        if let Some(question) = self.script.get(index) {
            let prompt = question.prompt.clone();
            self.say(&prompt, true);
        }
    }

    /// Speak `text`; new turns go into the transcript, re-asks do not
    fn say(&mut self, text: &str, record: bool) {
        self.timer.cancel();
        self.awaiting_answer = false;
        if record {
            self.transcript.append(Speaker::Ai, text);
        }
        if let Err(e) = self.speech.speak(text) {
            warn!("Failed to speak: {}", e);
            // Nothing will report the end of this utterance
            self.after_speech();
        }
    }

    fn after_speech(&mut self) {
        if !self.in_setup() {
            return;
        }
        match self.speech.start_listening() {
            Ok(true) => {}
            Ok(false) => debug!("Recognition not started"),
            Err(e) => warn!("Error starting recognition: {}", e),
        }
        self.processing = false;
        self.awaiting_answer = true;
        let ticket = self.timer.arm();
        self.host
            .schedule(self.timer.window(), Scheduled::NoResponse(ticket));
    }

    fn on_utterance(&mut self, text: String) {
        if self.processing || !self.in_setup() || self.generation_requested {
            debug!("Dropping utterance while busy: {}", text);
            return;
        }
        self.processing = true;
        self.awaiting_answer = false;
        self.speech.stop_listening();
        self.timer.cancel();
        self.transcript.append(Speaker::User, text.as_str());
        self.advance(&text);
    }

    fn on_no_response(&mut self, ticket: TimerTicket) {
        if !self.timer.fire(ticket) {
            return;
        }
        if self.processing || !self.awaiting_answer || !self.in_setup() {
            debug!("No-response timer expired while busy, ignoring");
            return;
        }
        info!("No response detected, re-asking question");
        self.awaiting_answer = false;
        self.speech.stop_listening();
        self.host
            .schedule(self.config.follow_up_delay, Scheduled::ReAsk(self.index));
    }

    fn submit_generation(&mut self) {
        if self.phase != DialoguePhase::Generating || self.generation_requested {
            return;
        }
        self.generation_requested = true;
        self.say(GENERATING_ANNOUNCEMENT, true);
        let request = GenerationRequest::new(&self.answers, &self.user.user_id);
        info!("Generating interview for user {}", self.user.user_id);
        self.host.request_generation(request);
    }

    fn schedule_navigation(&mut self) {
        if self.navigation_scheduled {
            return;
        }
        self.navigation_scheduled = true;
        self.host
            .schedule(self.config.navigation_delay, Scheduled::Navigate);
    }

    fn navigate(&mut self) {
        if self.navigated {
            return;
        }
        self.navigated = true;
        let route = self.config.landing_route.clone();
        info!("Navigating to {}", route);
        self.host.navigate(&route);
    }

    pub fn phase(&self) -> DialoguePhase {
        self.phase
    }

    pub fn call_status(&self) -> CallStatus {
        self.call_status
    }

    /// Index of the question currently being asked
    pub fn question_index(&self) -> usize {
        self.index
    }

    pub fn script(&self) -> &SetupScript {
        &self.script
    }

    pub fn answers(&self) -> &SetupAnswers {
        &self.answers
    }

    pub fn transcript(&self) -> &TranscriptLog {
        &self.transcript
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    pub fn is_speaking(&self) -> bool {
        self.speech.is_speaking()
    }

    pub fn is_listening(&self) -> bool {
        self.speech.is_listening()
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn is_timer_armed(&self) -> bool {
        self.timer.is_armed()
    }

    pub fn speech(&self) -> &SpeechAdapter<B> {
        &self.speech
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
