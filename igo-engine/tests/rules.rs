use igo_engine::{Board, BoardSize, Cell, Game, GameConfig, GoError, Player, Stone};

const V: BoardSize = BoardSize::NINE;

fn play_all(board: &mut Board, stone: Stone, points: &[(u8, u8)]) {
    for &(x, y) in points {
        board.play(V.vertex(x, y), stone).unwrap();
    }
}

#[test]
fn occupied_vertex_rejects_both_colors() {
    let mut board = Board::new(V);
    for v in [V.vertex(0, 0), V.vertex(4, 4), V.vertex(8, 3)] {
        board.play(v, Stone::Black).unwrap();
        assert_eq!(board.play(v, Stone::White), Err(GoError::OccupiedVertex));
        assert_eq!(board.play(v, Stone::Black), Err(GoError::OccupiedVertex));
    }
}

#[test]
fn ko_round_trip() {
    let mut board = Board::new(V);
    play_all(&mut board, Stone::Black, &[(0, 2), (1, 1), (2, 2)]);
    play_all(&mut board, Stone::White, &[(0, 3), (1, 2), (2, 3), (1, 4)]);

    board.play(V.vertex(1, 3), Stone::Black).unwrap();
    let ko = V.vertex(1, 2);
    assert_eq!(board.read(ko), Ok(Cell::Ko));
    assert_eq!(board.play(ko, Stone::White), Err(GoError::KoForbidden));

    board.play(V.vertex(8, 8), Stone::White).unwrap();
    board.play(ko, Stone::White).unwrap();
    assert_eq!(board.read(ko), Ok(Cell::Stone(Stone::White)));
}

#[test]
fn failed_play_leaves_board_unchanged() {
    let mut board = Board::new(V);
    play_all(&mut board, Stone::Black, &[(0, 2), (1, 1), (2, 2), (1, 3)]);
    let snapshot: Vec<_> = board.current_board().collect();
    let before = board.clone();

    assert_eq!(board.play(V.vertex(1, 2), Stone::White), Err(GoError::NoLiberty));
    assert_eq!(board, before);
    assert_eq!(board.current_board().collect::<Vec<_>>(), snapshot);
}

#[test]
fn thirteen_by_thirteen_capture() {
    let size = BoardSize::THIRTEEN;
    let mut board = Board::new(size);
    board.play(size.vertex(12, 6), Stone::Black).unwrap();
    for (x, y) in [(11, 6), (12, 5)] {
        board.play(size.vertex(x, y), Stone::White).unwrap();
    }
    assert_eq!(board.stone_at(size.vertex(12, 6)), Some(Stone::Black));

    let placement = board.play(size.vertex(12, 7), Stone::White).unwrap();
    assert_eq!(placement.captured, vec![size.vertex(12, 6)]);
    assert_eq!(board.read(size.vertex(12, 6)), Ok(Cell::Empty));
}

#[test]
fn game_delegates_to_board() {
    let mut game = Game::new(GameConfig::new(V)).unwrap();
    game.add_player(Player::new(Stone::Black)).unwrap();
    game.add_player(Player::new(Stone::White)).unwrap();

    game.play(V.vertex(2, 2), Stone::Black).unwrap();
    assert_eq!(game.play(V.vertex(3, 3), Stone::Black), Err(GoError::OutOfTurn));
    game.play(V.vertex(3, 3), Stone::White).unwrap();

    let rendered: String = game.current_board().map(|(_, c)| c.symbol()).collect();
    assert_eq!(rendered.len(), 81);
    assert_eq!(rendered.chars().filter(|&c| c != '+').count(), 2);
    assert_eq!(game.board().to_string().lines().nth(2), Some("++B++++++"));
}
