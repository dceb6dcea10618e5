use rvolunteer::core::chat::{GREETING, Intent, MAIN_MENU, Transcript};
use rvolunteer::errors::AppError;
use rvolunteer::models::chat_message::Sender;

fn options_of(t: &Transcript) -> Vec<String> {
    t.last_bot_message()
        .and_then(|m| m.options.clone())
        .unwrap_or_default()
}

#[test]
fn test_classify_keywords() {
    assert_eq!(Intent::classify("Find opportunities"), Intent::FindOpportunities);
    assert_eq!(Intent::classify("any OPPORTUNITIES near me?"), Intent::FindOpportunities);
    assert_eq!(Intent::classify("How to get started"), Intent::GetStarted);
    assert_eq!(Intent::classify("Track my hours"), Intent::TrackHours);
    assert_eq!(Intent::classify("Connect with others"), Intent::Connect);
    assert_eq!(Intent::classify("blah blah"), Intent::Fallback);
}

#[test]
fn test_first_rule_wins() {
    assert_eq!(Intent::classify("find my hours"), Intent::FindOpportunities);
    assert_eq!(Intent::classify("start logging hours"), Intent::GetStarted);
    assert_eq!(Intent::classify("connect my hours"), Intent::TrackHours);
}

#[test]
fn test_transcript_starts_with_greeting() {
    let t = Transcript::new();
    let msgs = t.messages();
    assert_eq!(msgs.len(), 1);
    assert_eq!(msgs[0].id, 1);
    assert_eq!(msgs[0].sender, Sender::Bot);
    assert_eq!(msgs[0].content, GREETING);
    assert_eq!(options_of(&t), MAIN_MENU);
}

#[test]
fn test_get_started_scenario() {
    let mut t = Transcript::new();
    let reply = t.send("How to get started").unwrap();
    assert!(reply.content.starts_with("Getting started is easy!"));
    assert_eq!(
        reply.options.clone().unwrap(),
        ["Update profile", "Browse opportunities", "Get recommendations"]
    );
}

#[test]
fn test_fallback_scenario() {
    let mut t = Transcript::new();
    let reply = t.send("blah blah").unwrap();
    assert_eq!(
        reply.content,
        "I'm here to help! Could you please be more specific about what you're looking for?"
    );
    assert_eq!(reply.options.clone().unwrap(), MAIN_MENU);
}

#[test]
fn test_connect_offers_main_menu() {
    let (response, options) = Intent::Connect.reply();
    assert!(response.contains("Community tab"));
    assert_eq!(options, MAIN_MENU);
}

#[test]
fn test_send_appends_user_then_bot() {
    let mut t = Transcript::new();
    t.send("  Track my hours  ").unwrap();
    t.send("blah").unwrap();

    let msgs = t.messages();
    assert_eq!(msgs.len(), 5);
    let ids: Vec<u32> = msgs.iter().map(|m| m.id).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5]);

    assert_eq!(msgs[1].sender, Sender::User);
    assert_eq!(msgs[1].content, "Track my hours");
    assert!(msgs[1].options.is_none());
    assert_eq!(msgs[2].sender, Sender::Bot);
    assert_eq!(
        msgs[2].options.clone().unwrap(),
        ["Log hours", "View history", "Generate report"]
    );
}

#[test]
fn test_empty_input_is_rejected_without_appending() {
    let mut t = Transcript::new();
    assert!(matches!(t.send("   "), Err(AppError::EmptyMessage)));
    assert_eq!(t.messages().len(), 1);
}

#[test]
fn test_selected_option_is_classified_like_typed_text() {
    let mut t = Transcript::new();

    // "Find opportunities" from the greeting
    let reply = t.select_option(1, 0).unwrap();
    assert!(reply.content.starts_with("I can help you find volunteer opportunities!"));
    assert_eq!(t.messages()[1].content, "Find opportunities");

    // "Education" carries no keyword, so it lands on the fallback
    let reply = t.select_option(3, 1).unwrap();
    assert_eq!(reply.options.clone().unwrap(), MAIN_MENU);
    assert_eq!(t.messages()[3].content, "Education");
}

#[test]
fn test_no_memory_between_turns() {
    let mut t = Transcript::new();
    t.send("How to get started").unwrap();
    // "Browse opportunities" re-enters the classifier and hits the search rule
    let last_id = t.last_bot_message().unwrap().id;
    let reply = t.select_option(last_id, 1).unwrap();
    assert_eq!(
        reply.options.clone().unwrap(),
        ["Environmental", "Education", "Community Service", "Healthcare", "Other"]
    );
}

#[test]
fn test_invalid_option_selection() {
    let mut t = Transcript::new();
    assert!(matches!(
        t.select_option(1, 9),
        Err(AppError::InvalidOption { message_id: 1, index: 9 })
    ));
    t.send("hello").unwrap();
    // user messages carry no options
    assert!(t.select_option(2, 0).is_err());
    assert_eq!(t.messages().len(), 3);
}
