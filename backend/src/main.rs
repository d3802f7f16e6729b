use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    extract::State,
    response::IntoResponse,
    routing::get,
    Router,
};
use futures::{sink::SinkExt, stream::StreamExt};
use maze_core::maze::Maze3D;
use maze_core::MazeConfig;
use std::net::SocketAddr;
use std::sync::{Arc, RwLock};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

mod session;
use session::Session;

// Application State
struct AppState {
    config: MazeConfig,
    // Last converted maze, handed to new sessions so they can explore it straight away
    latest_maze: RwLock<Option<Maze3D>>,
}

fn load_config() -> MazeConfig {
    match std::env::var("MAZE_CONFIG") {
        Ok(path) => match MazeConfig::load(&path) {
            Ok(config) => {
                info!("Using config from {}", path);
                config
            }
            Err(e) => {
                warn!("Could not load config {}: {}; using defaults", path, e);
                MazeConfig::default()
            }
        },
        Err(_) => MazeConfig::default(),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let shared_state = Arc::new(AppState {
        config: load_config(),
        latest_maze: RwLock::new(None),
    });

    let app = Router::new()
        .route("/", get(root))
        .route("/ws", get(ws_handler))
        .nest_service("/textures", ServeDir::new("textures"))
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("listening on {}", addr);
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            warn!("Failed to bind {}: {}", addr, e);
            return;
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        warn!("Server stopped: {}", e);
    }
}

async fn root() -> &'static str {
    "Hello from Maze Backend!"
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let session_id = uuid::Uuid::new_v4();
    info!("Client connected (session {})", session_id);

    let (mut sender, mut receiver) = socket.split();
    let mut session = Session::new(state.config);

    // Start from the initial floor plan, plus whatever maze was converted last
    let mut greeting = session.handle("CLEAR");
    let latest = state.latest_maze.read().ok().and_then(|m| m.clone());
    if let Some(maze) = latest {
        info!("Session {} starts with the latest maze ({} walls)", session_id, maze.number_of_walls());
        session.set_maze3d(maze);
        greeting.push(session.maze3d_update());
        greeting.push(session.player_update());
    }
    for msg in greeting {
        if sender.send(Message::Text(msg)).await.is_err() {
            return;
        }
    }

    while let Some(msg) = receiver.next().await {
        let msg = if let Ok(msg) = msg {
            msg
        } else {
            break;
        };

        let text = match msg {
            Message::Text(text) => text,
            Message::Close(_) => break,
            _ => continue,
        };
        tracing::debug!("Session {} received: {}", session_id, text);

        let revision = session.maze3d_revision();
        let replies = session.handle(&text);

        if session.maze3d_revision() != revision {
            if let Ok(mut latest) = state.latest_maze.write() {
                *latest = Some(session.maze3d().clone());
            }
        }

        for reply in replies {
            if sender.send(Message::Text(reply)).await.is_err() {
                info!("Session {} lost its client", session_id);
                return;
            }
        }
    }

    info!("Client disconnected (session {})", session_id);
}
