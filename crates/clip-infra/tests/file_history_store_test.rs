//! File history store integration tests
//! 文件历史存储集成测试

use std::sync::Arc;

use clip_core::ports::HistoryStorePort;
use clip_core::ClipEntry;
use clip_infra::codec::entry_line;
use clip_infra::FileHistoryStore;
use tempfile::TempDir;

#[tokio::test]
async fn concurrent_appends_keep_every_record_intact() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(FileHistoryStore::new(dir.path().join("history.log")));

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store
                .append(&ClipEntry::text(format!("entry-{i}")))
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let mut texts: Vec<String> = store
        .load()
        .await
        .unwrap()
        .into_iter()
        .map(|e| String::from_utf8(e.payload().to_vec()).unwrap())
        .collect();
    texts.sort();

    let mut expected: Vec<String> = (0..16).map(|i| format!("entry-{i}")).collect();
    expected.sort();
    assert_eq!(texts, expected);
}

#[tokio::test]
async fn records_written_by_hand_are_readable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.log");
    let png = ClipEntry::new("public.png", vec![0x89, b'P', b'N', b'G']);
    std::fs::write(
        &path,
        format!(
            "{}\n{}\n",
            entry_line::encode(&ClipEntry::text("typed")),
            entry_line::encode(&png)
        ),
    )
    .unwrap();

    let store = FileHistoryStore::new(&path);
    store.append(&ClipEntry::text("appended")).await.unwrap();

    let entries = store.load().await.unwrap();
    assert_eq!(
        entries,
        vec![ClipEntry::text("typed"), png, ClipEntry::text("appended")]
    );
}

#[tokio::test]
async fn file_without_trailing_newline_still_loads_last_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.log");
    std::fs::write(&path, "public.utf8-plain-text:YQ==\npublic.utf8-plain-text:Yg==").unwrap();

    let store = FileHistoryStore::new(&path);

    assert_eq!(store.last().await.unwrap(), Some(ClipEntry::text("b")));
}
