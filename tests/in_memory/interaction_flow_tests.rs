//! End-to-end interaction flows over the in-memory adapters.

use std::sync::Arc;

use rstest::{fixture, rstest};
use taskboard::board::{
    adapters::memory::{InMemoryBoardView, IssuedRequest, RecordingBoardApi},
    domain::{BoardEvent, ClickTarget, NewGroupInput, NewTaskInput, PanelState},
    ports::BoardView,
    services::BoardEventRouter,
};

type TestRouter = BoardEventRouter<RecordingBoardApi, InMemoryBoardView>;

struct Board {
    api: Arc<RecordingBoardApi>,
    view: Arc<InMemoryBoardView>,
    router: TestRouter,
}

#[fixture]
fn board() -> Board {
    let api = Arc::new(RecordingBoardApi::new());
    let view = Arc::new(InMemoryBoardView::new());
    let router = BoardEventRouter::new(Arc::clone(&api), Arc::clone(&view));
    Board { api, view, router }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn typing_a_task_and_submitting_round_trips_the_form(board: Board) {
    board.view.set_task_form(NewTaskInput::new(
        "Mow the lawn",
        "Front and back",
        "2026-09-20",
        "1",
    ));

    board
        .router
        .handle_event(BoardEvent::TitleFocused)
        .await
        .expect("focus should succeed");
    board
        .router
        .handle_event(BoardEvent::TaskFormSubmitted)
        .await
        .expect("submit should succeed");

    assert_eq!(
        board.api.requests(),
        vec![
            IssuedRequest::CreateTask(NewTaskInput::new(
                "Mow the lawn",
                "Front and back",
                "2026-09-20",
                "1",
            )),
            IssuedRequest::FetchBoard,
        ]
    );
    assert!(board.view.read_task_form().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_full_session_of_interactions_issues_one_request_per_action(board: Board) {
    board.view.set_group_form(NewGroupInput::new("Garden"));

    board
        .router
        .handle_event(BoardEvent::GroupFormSubmitted)
        .await
        .expect("group submit should succeed");
    board
        .router
        .handle_event(BoardEvent::StarClicked {
            id_attr: Some("11".to_owned()),
        })
        .await
        .expect("star click should succeed");
    board
        .router
        .handle_event(BoardEvent::SortClicked {
            url_attr: Some("/api/tasks?order=due".to_owned()),
        })
        .await
        .expect("sort click should succeed");
    board
        .router
        .handle_event(BoardEvent::CheckClicked {
            id_attr: Some("11".to_owned()),
        })
        .await
        .expect("check click should succeed");

    // Four user actions, four mutations, four board fetches, interleaved.
    let mutations = board
        .api
        .requests()
        .iter()
        .filter(|request| !matches!(request, IssuedRequest::FetchBoard))
        .count();
    assert_eq!(mutations, 4);
    assert_eq!(board.api.fetch_count(), 4);
    assert_eq!(board.view.render_count(), 4);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn panel_follows_focus_and_outside_clicks_across_a_session(board: Board) {
    assert_eq!(board.router.panel_state(), PanelState::Hidden);

    board
        .router
        .handle_event(BoardEvent::TitleFocused)
        .await
        .expect("focus should succeed");
    assert!(board.view.panel_visible());

    // Clicking into the description field keeps the panel open.
    board
        .router
        .handle_event(BoardEvent::AppClicked {
            target: ClickTarget::TextArea,
        })
        .await
        .expect("field click should succeed");
    assert!(board.view.panel_visible());

    // Clicking plain page text closes it.
    board
        .router
        .handle_event(BoardEvent::AppClicked {
            target: ClickTarget::Other,
        })
        .await
        .expect("outside click should succeed");
    assert!(!board.view.panel_visible());
}
