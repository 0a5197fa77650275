use std::sync::Arc;

use crate::{
    domain::MessageRef,
    formatting::translation_reply,
    language::LanguageResolver,
    messaging::{port::MessagingPort, types::ReactionEvent},
    ports::Translator,
    Result,
};

/// How a single reaction event ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReactionOutcome {
    /// Not a flag of a country with a known language.
    Unsupported,
    /// History returned no message at the reacted-to timestamp.
    MessageNotFound,
    /// The message has no text to translate.
    EmptyMessage,
    /// Translation posted in the thread.
    Posted(MessageRef),
    /// Translation produced but the reply could not be posted.
    PostFailed,
}

/// Turns flag reactions into threaded translations.
///
/// Holds only long-lived, read-mostly handles; every call to [`handle`] is
/// independent, so one instance is shared by all in-flight events.
///
/// [`handle`]: ReactionTranslator::handle
#[derive(Clone)]
pub struct ReactionTranslator {
    messenger: Arc<dyn MessagingPort>,
    translator: Arc<dyn Translator>,
    resolver: LanguageResolver,
}

impl ReactionTranslator {
    pub fn new(messenger: Arc<dyn MessagingPort>, translator: Arc<dyn Translator>) -> Self {
        Self::with_resolver(messenger, translator, LanguageResolver::builtin())
    }

    pub fn with_resolver(
        messenger: Arc<dyn MessagingPort>,
        translator: Arc<dyn Translator>,
        resolver: LanguageResolver,
    ) -> Self {
        Self {
            messenger,
            translator,
            resolver,
        }
    }

    /// Process one reaction event.
    ///
    /// History and translation failures are returned to the caller. Failing to
    /// post the reply is logged here and reported as
    /// [`ReactionOutcome::PostFailed`].
    pub async fn handle(&self, event: &ReactionEvent) -> Result<ReactionOutcome> {
        let Some(language) = self.resolver.resolve(&event.reaction) else {
            tracing::info!(reaction = %event.reaction, "Unable to translate: not a country flag");
            return Ok(ReactionOutcome::Unsupported);
        };

        let Some(message) = self
            .messenger
            .fetch_message(&event.channel, &event.message_ts)
            .await?
        else {
            tracing::debug!(
                channel = %event.channel,
                ts = %event.message_ts,
                "reacted-to message not found in history"
            );
            return Ok(ReactionOutcome::MessageNotFound);
        };

        if message.text.trim().is_empty() {
            tracing::debug!(
                channel = %event.channel,
                ts = %event.message_ts,
                "reacted-to message has no text"
            );
            return Ok(ReactionOutcome::EmptyMessage);
        }

        let translation = self
            .translator
            .translate(&message.text, &language.code)
            .await?;
        tracing::info!(
            channel = %event.channel,
            ts = %event.message_ts,
            language = %language.name,
            source = translation.detected_source_language.as_deref().unwrap_or("unknown"),
            "translated message"
        );

        let reply = translation_reply(&event.reaction, &translation.text);
        match self
            .messenger
            .post_thread_reply(&event.channel, &event.message_ts, &reply)
            .await
        {
            Ok(posted) => Ok(ReactionOutcome::Posted(posted)),
            Err(e) => {
                tracing::error!(
                    channel = %event.channel,
                    ts = %event.message_ts,
                    error = %e,
                    "failed to post translation"
                );
                Ok(ReactionOutcome::PostFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ChannelId, MessageTs},
        errors::Error,
        messaging::types::Message,
        ports::Translation,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeMessenger {
        history: Option<String>,
        fail_post: bool,
        fetches: Mutex<Vec<(ChannelId, MessageTs)>>,
        posts: Mutex<Vec<(ChannelId, MessageTs, String)>>,
    }

    impl FakeMessenger {
        fn with_text(text: &str) -> Self {
            Self {
                history: Some(text.to_string()),
                ..Default::default()
            }
        }

        fn fetch_count(&self) -> usize {
            self.fetches.lock().unwrap().len()
        }

        fn posted(&self) -> Vec<(ChannelId, MessageTs, String)> {
            self.posts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MessagingPort for FakeMessenger {
        async fn fetch_message(
            &self,
            channel: &ChannelId,
            ts: &MessageTs,
        ) -> Result<Option<Message>> {
            self.fetches
                .lock()
                .unwrap()
                .push((channel.clone(), ts.clone()));
            Ok(self.history.as_ref().map(|text| Message {
                ts: ts.clone(),
                text: text.clone(),
            }))
        }

        async fn post_thread_reply(
            &self,
            channel: &ChannelId,
            thread_ts: &MessageTs,
            text: &str,
        ) -> Result<MessageRef> {
            if self.fail_post {
                return Err(Error::Slack("channel_not_found".to_string()));
            }
            self.posts
                .lock()
                .unwrap()
                .push((channel.clone(), thread_ts.clone(), text.to_string()));
            Ok(MessageRef {
                channel: channel.clone(),
                ts: MessageTs("1700000001.000200".to_string()),
            })
        }
    }

    #[derive(Default)]
    struct FakeTranslator {
        fail: bool,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl FakeTranslator {
        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Translator for FakeTranslator {
        async fn translate(&self, text: &str, target_language: &str) -> Result<Translation> {
            self.calls
                .lock()
                .unwrap()
                .push((text.to_string(), target_language.to_string()));
            if self.fail {
                return Err(Error::Translation(
                    "403 Forbidden: quota exceeded".to_string(),
                ));
            }
            Ok(Translation {
                text: "Bonjour".to_string(),
                detected_source_language: Some("en".to_string()),
            })
        }
    }

    fn event(reaction: &str) -> ReactionEvent {
        ReactionEvent {
            channel: ChannelId("C123".to_string()),
            message_ts: MessageTs("1700000000.000100".to_string()),
            reaction: reaction.to_string(),
        }
    }

    fn handler(
        messenger: &Arc<FakeMessenger>,
        translator: &Arc<FakeTranslator>,
    ) -> ReactionTranslator {
        ReactionTranslator::new(messenger.clone(), translator.clone())
    }

    #[tokio::test]
    async fn flag_reaction_posts_translation_in_thread() {
        let messenger = Arc::new(FakeMessenger::with_text("Hello"));
        let translator = Arc::new(FakeTranslator::default());

        let outcome = handler(&messenger, &translator)
            .handle(&event("flag-fr"))
            .await
            .unwrap();

        assert!(matches!(outcome, ReactionOutcome::Posted(_)));
        assert_eq!(
            translator.calls(),
            vec![("Hello".to_string(), "fr".to_string())]
        );
        assert_eq!(
            messenger.posted(),
            vec![(
                ChannelId("C123".to_string()),
                MessageTs("1700000000.000100".to_string()),
                "_Translation for :flag-fr:_\nBonjour".to_string(),
            )]
        );
    }

    #[tokio::test]
    async fn non_flag_reaction_makes_no_calls() {
        let messenger = Arc::new(FakeMessenger::with_text("Hello"));
        let translator = Arc::new(FakeTranslator::default());

        let outcome = handler(&messenger, &translator)
            .handle(&event("thumbsup"))
            .await
            .unwrap();

        assert_eq!(outcome, ReactionOutcome::Unsupported);
        assert_eq!(messenger.fetch_count(), 0);
        assert!(translator.calls().is_empty());
        assert!(messenger.posted().is_empty());
    }

    #[tokio::test]
    async fn missing_message_skips_translation() {
        let messenger = Arc::new(FakeMessenger::default());
        let translator = Arc::new(FakeTranslator::default());

        let outcome = handler(&messenger, &translator)
            .handle(&event("flag-fr"))
            .await
            .unwrap();

        assert_eq!(outcome, ReactionOutcome::MessageNotFound);
        assert_eq!(messenger.fetch_count(), 1);
        assert!(translator.calls().is_empty());
        assert!(messenger.posted().is_empty());
    }

    #[tokio::test]
    async fn blank_message_skips_translation() {
        let messenger = Arc::new(FakeMessenger::with_text("  \n"));
        let translator = Arc::new(FakeTranslator::default());

        let outcome = handler(&messenger, &translator)
            .handle(&event("flag-fr"))
            .await
            .unwrap();

        assert_eq!(outcome, ReactionOutcome::EmptyMessage);
        assert!(translator.calls().is_empty());
        assert!(messenger.posted().is_empty());
    }

    #[tokio::test]
    async fn translation_failure_propagates_and_nothing_is_posted() {
        let messenger = Arc::new(FakeMessenger::with_text("Hello"));
        let translator = Arc::new(FakeTranslator {
            fail: true,
            ..Default::default()
        });

        let err = handler(&messenger, &translator)
            .handle(&event("flag-fr"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Translation(_)));
        assert_eq!(translator.calls().len(), 1);
        assert!(messenger.posted().is_empty());
    }

    #[tokio::test]
    async fn post_failure_is_caught() {
        let messenger = Arc::new(FakeMessenger {
            history: Some("Hello".to_string()),
            fail_post: true,
            ..Default::default()
        });
        let translator = Arc::new(FakeTranslator::default());

        let outcome = handler(&messenger, &translator)
            .handle(&event("flag-fr"))
            .await
            .unwrap();

        assert_eq!(outcome, ReactionOutcome::PostFailed);
    }

    #[tokio::test]
    async fn identical_requests_hit_the_provider_every_time() {
        let messenger = Arc::new(FakeMessenger::with_text("Hello"));
        let translator = Arc::new(FakeTranslator::default());
        let handler = handler(&messenger, &translator);

        handler.handle(&event("flag-fr")).await.unwrap();
        handler.handle(&event("flag-fr")).await.unwrap();

        assert_eq!(translator.calls().len(), 2);
        assert_eq!(messenger.posted().len(), 2);
    }
}
