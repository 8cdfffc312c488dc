use std::fs;
use std::path::{Path, PathBuf};

use rollcall::report::{self, records};

fn write_sources(dir: &Path, players: &str, events: &str, rsvps: &str) -> (PathBuf, PathBuf, PathBuf) {
    let players_path = dir.join("players.csv");
    let events_path = dir.join("events.csv");
    let rsvps_path = dir.join("rsvps.csv");
    fs::write(&players_path, players).unwrap();
    fs::write(&events_path, events).unwrap();
    fs::write(&rsvps_path, rsvps).unwrap();
    (players_path, events_path, rsvps_path)
}

#[test]
fn renders_confirmed_rosters_per_event() {
    let dir = tempfile::tempdir().unwrap();
    let (players, events, rsvps) = write_sources(
        dir.path(),
        "id,name\np1,Ana\np2,Bo\np3,Cleo\n",
        "id,name\n2,Saturday finals\n1,Friday scrim\n",
        "event_id,player_id,status\n1,p1,Yes\n1,p2,No\n2,p1,Yes\n2,p3,Yes\n2,p2,Maybe\n",
    );

    let html = report::generate(&players, &events, &rsvps).unwrap();

    // Numeric ordering: event 1 before event 2 despite file order.
    let friday = html.find("Friday scrim").unwrap();
    let saturday = html.find("Saturday finals").unwrap();
    assert!(friday < saturday);

    assert!(html.contains("<td>Ana</td><td>1</td>"));
    assert!(html.contains("Ana, Cleo"));
    assert!(html.contains("<td>2</td>"));
}

#[test]
fn unknown_references_become_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    let (players, events, rsvps) = write_sources(
        dir.path(),
        "id,name\np1,Ana\n",
        "id,name\n1,Friday scrim\n",
        "event_id,player_id,status\n1,ghost,Yes\n9,p1,Yes\n",
    );

    let html = report::generate(&players, &events, &rsvps).unwrap();
    assert!(html.contains("(unknown player)"));
    assert!(html.contains("(unknown event)"));
}

#[test]
fn invalid_statuses_and_malformed_rows_are_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let (players, events, rsvps) = write_sources(
        dir.path(),
        "id,name\np1,Ana\np2,Bo\n",
        "id,name\n1,Friday scrim\n",
        "event_id,player_id,status\n1,p1,Accepted\n1,p2\n1,p2,Yes\n",
    );

    let html = report::generate(&players, &events, &rsvps).unwrap();
    assert!(html.contains("<td>Bo</td><td>1</td>"));
    assert!(!html.contains("Ana"));
}

#[test]
fn event_with_no_rsvps_still_gets_a_row() {
    let dir = tempfile::tempdir().unwrap();
    let (players, events, rsvps) = write_sources(
        dir.path(),
        "id,name\np1,Ana\n",
        "id,name\n1,Friday scrim\n2,Quiet night\n",
        "event_id,player_id,status\n1,p1,Yes\n",
    );

    let html = report::generate(&players, &events, &rsvps).unwrap();
    assert!(html.contains("Quiet night"));
    assert!(html.contains("<td></td><td>0</td>"));
}

#[test]
fn attendee_names_are_html_escaped() {
    let dir = tempfile::tempdir().unwrap();
    let (players, events, rsvps) = write_sources(
        dir.path(),
        "id,name\np1,Ana <admin>\n",
        "id,name\n1,Scrim & social\n",
        "event_id,player_id,status\n1,p1,Yes\n",
    );

    let html = report::generate(&players, &events, &rsvps).unwrap();
    assert!(html.contains("Scrim &amp; social"));
    assert!(html.contains("Ana &lt;admin&gt;"));
    assert!(!html.contains("Ana <admin>"));
}

#[test]
fn missing_source_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let (players, events, _) = write_sources(
        dir.path(),
        "id,name\n",
        "id,name\n",
        "event_id,player_id,status\n",
    );

    let missing = dir.path().join("nope.csv");
    let err = report::generate(&players, &events, &missing).unwrap_err();
    assert!(matches!(err, records::ReportError::MissingSource { .. }));
}

#[test]
fn non_numeric_event_ids_sort_after_numeric() {
    let dir = tempfile::tempdir().unwrap();
    let (players, events, rsvps) = write_sources(
        dir.path(),
        "id,name\n",
        "id,name\nfinale,Wrap party\n10,Tenth night\n2,Second night\n",
        "event_id,player_id,status\n",
    );

    let html = report::generate(&players, &events, &rsvps).unwrap();
    let second = html.find("Second night").unwrap();
    let tenth = html.find("Tenth night").unwrap();
    let wrap = html.find("Wrap party").unwrap();
    assert!(second < tenth && tenth < wrap);
}
