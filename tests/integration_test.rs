use generate_questions::models::{load_questions, save_questions};
use generate_questions::{AnswerKey, App, Config, QuestionDocument, QuestionParser};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

const SAMPLE: &str = "\
face2face Elementary Placement Test
© Cambridge University Press 2012

1 A Hello, I'm Jack.
B Hi, Jack. ___ Sara.
a) I'm
b) I
c) Me

2 A Where are you from?
B ___ from Italy.
a) I'm
b) I
c) Me
d) My

3 She ___ a doctor.
a) am
b) is
c) are

Photocopiable
7
What time is it?
a) Ten
b) Eleven
c) Twelve

8 Have you got a car? No, I haven't! I've got
a bike.
a) Right.
b) Wrong.
c) Maybe.
d) Never.

9 This block only has two options.
a) one
b) two

12
";

fn config_in(dir: &Path) -> Config {
    Config {
        input_file: dir.join("questions_text.txt").display().to_string(),
        output_file: dir.join("questions.json").display().to_string(),
        ..Config::default()
    }
}

#[test]
fn test_generate_questions_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.input_file, SAMPLE).unwrap();

    let app = App::initialize(config.clone()).unwrap();
    let summary = app.run().unwrap();
    assert_eq!(summary.questions, 5);
    assert_eq!(summary.dropped, 2);

    let document = load_questions(Path::new(&config.output_file)).unwrap();
    let texts: Vec<&str> = document.questions.iter().map(|q| q.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "A Hello, I'm Jack.\nB Hi, Jack. ___ Sara.",
            "A Where are you from?\nB ___ from Italy.",
            "She ___ a doctor.",
            "What time is it?",
            "Have you got a car?\nNo, I haven't!\nI've got a bike.",
        ]
    );

    let q7 = &document.questions[3];
    assert_eq!(q7.text_html, "<b>Question 7</b>\n\nWhat time is it?");
    assert_eq!(q7.answer_3, "Twelve");
    assert_eq!(q7.answer_4, "");
    assert_eq!(q7.answer_4_html, "");
    assert_eq!(q7.correct_answer_id, 3);

    let q2 = &document.questions[1];
    assert_eq!(q2.answer_4_html, "4. My");

    let ids: Vec<u32> = document.questions.iter().map(|q| q.correct_answer_id).collect();
    assert_eq!(ids, vec![1, 1, 2, 3, 3]);
    assert!(document.questions.iter().all(|q| q.score == 1));
}

#[test]
fn test_output_round_trip() {
    let key = AnswerKey::builtin();
    let parser = QuestionParser::new(&key).unwrap();
    let document = QuestionDocument::new(parser.parse(SAMPLE));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.json");
    save_questions(&path, &document).unwrap();
    let first = fs::read_to_string(&path).unwrap();

    let reloaded = load_questions(&path).unwrap();
    assert_eq!(reloaded, document);

    save_questions(&path, &reloaded).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), first);
}

#[test]
fn test_answer_key_override() {
    let dir = tempfile::tempdir().unwrap();
    let key_path = dir.path().join("answers.toml");
    fs::write(&key_path, "[answers]\n7 = 2\n").unwrap();

    let config = Config {
        answer_key_file: Some(key_path.display().to_string()),
        ..config_in(dir.path())
    };
    fs::write(&config.input_file, "7 What time is it?\na) Ten\nb) Eleven\nc) Twelve\n").unwrap();

    App::initialize(config.clone()).unwrap().run().unwrap();

    let document = load_questions(Path::new(&config.output_file)).unwrap();
    assert_eq!(document.questions[0].correct_answer_id, 2);
}
