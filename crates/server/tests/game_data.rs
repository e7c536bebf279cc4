use std::{fs, path::Path, sync::Arc};

use reqwest::StatusCode;
use server::{config::Config, router, state::AppState};
use storage::{ImageKind, InMemoryCatalog};
use tokio::net::TcpListener;

const TOKEN: &str = "open-sesame";

async fn spawn(state: Arc<AppState>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(server::serve(listener, router(state)));
    format!("http://{address}")
}

fn seeded_catalog(correct: usize, wrong: usize, ending: usize) -> InMemoryCatalog {
    let catalog = InMemoryCatalog::new();
    catalog
        .insert(
            ImageKind::ChoiceA,
            (0..correct).map(|i| format!("/images/choice_a/{i}.jpg")),
        )
        .unwrap();
    catalog
        .insert(
            ImageKind::ChoiceB,
            (0..wrong).map(|i| format!("/images/choice_b/{i}.jpg")),
        )
        .unwrap();
    catalog
        .insert(
            ImageKind::Ending,
            (0..ending).map(|i| format!("/images/ending/{i}.png")),
        )
        .unwrap();
    catalog
}

fn in_memory_state(catalog: InMemoryCatalog) -> Arc<AppState> {
    AppState::new(Config::new(TOKEN, "./does-not-matter"), Arc::new(catalog))
}

#[tokio::test]
async fn missing_or_wrong_token_is_unauthorized() {
    let base = spawn(in_memory_state(seeded_catalog(5, 5, 1))).await;
    let client = reqwest::Client::new();

    let res = client.get(format!("{base}/game-data")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .get(format!("{base}/game-data"))
        .query(&[("auth", "nope")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn valid_token_returns_questions() {
    let base = spawn(in_memory_state(seeded_catalog(6, 7, 2))).await;

    let body: serde_json::Value = reqwest::Client::new()
        .get(format!("{base}/game-data"))
        .query(&[("auth", TOKEN)])
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap()
        .json()
        .await
        .unwrap();

    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 5);
    for question in questions {
        let correct = question["correct"].as_u64().unwrap();
        assert!(correct == 1 || correct == 2, "{question}");
        let key = if correct == 1 { "img1" } else { "img2" };
        assert!(question[key].as_str().unwrap().starts_with("/images/choice_a/"));
    }
    assert!(body["endingPhoto"].as_str().unwrap().starts_with("/images/ending/"));
}

#[tokio::test]
async fn header_token_is_accepted() {
    let base = spawn(in_memory_state(seeded_catalog(5, 5, 1))).await;

    let res = reqwest::Client::new()
        .get(format!("{base}/game-data"))
        .header("authorization", TOKEN)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn too_few_images_is_a_server_error() {
    let base = spawn(in_memory_state(seeded_catalog(3, 5, 1))).await;

    let res = reqwest::Client::new()
        .get(format!("{base}/game-data"))
        .query(&[("auth", TOKEN)])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.text().await.unwrap(), "Not enough images to create questions");
}

fn write_image(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"not really a jpeg").unwrap();
}

#[tokio::test]
async fn images_directory_is_served_behind_the_token() {
    let dir = tempfile::tempdir().unwrap();
    for i in 0..5 {
        write_image(dir.path(), &format!("choice_a/{i}.jpg"));
        write_image(dir.path(), &format!("choice_b/{i}.jpg"));
    }
    write_image(dir.path(), "ending/us.jpg");

    let state = AppState::from_config(Config::new(TOKEN, dir.path()));
    let base = spawn(state).await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .get(format!("{base}/game-data"))
        .query(&[("auth", TOKEN)])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["endingPhoto"], "/images/ending/us.jpg");

    let res = client
        .get(format!("{base}/images/ending/us.jpg"))
        .query(&[("auth", TOKEN)])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.bytes().await.unwrap().as_ref(), b"not really a jpeg");

    let res = client
        .get(format!("{base}/images/ending/us.jpg"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}
