use crate::server::api;

pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    pub fn to_http_string(&self) -> String {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status_code,
            self.status_text,
            self.content_type,
            self.body.len(),
            self.body
        )
    }
}

fn ok_json(body: String) -> HttpResponse {
    HttpResponse {
        status_code: 200,
        status_text: "OK",
        content_type: "application/json",
        body,
    }
}

/// Map an api result to a response: parse and validation problems are the
/// caller's fault (400), store faults are ours (500).
fn from_api_result(result: Result<String, api::RequestError>) -> HttpResponse {
    match result {
        Ok(payload) => ok_json(payload),
        Err(api::RequestError::Parse(err)) => {
            error_response(400, "Bad Request", &format!("Invalid request body: {err}"))
        }
        Err(api::RequestError::Validation(msg)) => error_response(400, "Bad Request", &msg),
        Err(api::RequestError::Store(err)) => {
            error_response(500, "Internal Server Error", &err.to_string())
        }
    }
}

pub fn route_request(method: &str, path: &str, body: &str) -> HttpResponse {
    let store_path = api::store_path_from_env();
    match (method, path) {
        ("GET", "/") => HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: "text/html; charset=utf-8",
            body: index_html(),
        },
        ("GET", "/api/health") => match api::health_payload() {
            Ok(payload) => ok_json(payload),
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        ("POST", "/api/dps") => from_api_result(api::dps_payload(body)),
        ("POST", "/api/abilities") => from_api_result(api::abilities_payload(body)),
        ("POST", "/api/rage") => from_api_result(api::rage_payload(body)),
        ("POST", "/api/gear/dps") => from_api_result(api::gear_dps_payload(&store_path, body)),
        ("GET", "/api/items") => from_api_result(api::items_list_payload(&store_path)),
        ("POST", "/api/items") => from_api_result(api::items_add_payload(&store_path, body)),
        _ => error_response(404, "Not Found", "Route not found"),
    }
}

fn error_response(status_code: u16, status_text: &'static str, message: &str) -> HttpResponse {
    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: format!(
            "{{\n  \"status\": \"error\",\n  \"message\": {}\n}}",
            serde_json::to_string(message).unwrap_or_else(|_| "\"Unknown error\"".to_string())
        ),
    }
}

fn index_html() -> String {
    r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>Warcalc Console</title>
  <style>
    body { font-family: Arial, sans-serif; max-width: 760px; margin: 24px auto; padding: 0 12px; }
    .card { border: 1px solid #ddd; border-radius: 8px; padding: 14px; margin: 14px 0; }
    label { display:block; margin: 8px 0 4px; font-weight: 600; }
    input { width: 100%; padding: 8px; box-sizing: border-box; }
    button { margin-top: 12px; padding: 8px 14px; }
    pre { background: #111; color: #aef2ae; padding: 12px; overflow: auto; border-radius: 6px; min-height: 160px; }
  </style>
</head>
<body>
  <h1>Warcalc Local API</h1>
  <p>Browser console for the warrior DPS endpoints.</p>

  <div class="card">
    <strong>Health</strong>
    <div><button id="health-btn">GET /api/health</button></div>
  </div>

  <div class="card">
    <strong>DPS</strong>
    <label for="payload">WarriorStats JSON</label>
    <input id="payload" value='{"player_level":60,"target_level":63,"weapon_skill":300,"base_damage_mh":100,"base_speed_mh":2.8,"attack_power":800,"hit":5,"spellbook_crit":20,"target_armor":3000}' />
    <div><button id="dps-btn">POST /api/dps</button></div>
  </div>

  <pre id="output">Ready.</pre>

  <script>
    const output = document.getElementById('output');

    async function request(path, options) {
      output.textContent = 'Loading…';
      const response = await fetch(path, options);
      const text = await response.text();
      output.textContent = 'HTTP ' + response.status + '\n' + text;
    }

    document.getElementById('health-btn').addEventListener('click', () => {
      request('/api/health', { method: 'GET' });
    });

    document.getElementById('dps-btn').addEventListener('click', () => {
      request('/api/dps', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: document.getElementById('payload').value,
      });
    });
  </script>
</body>
</html>
"#
    .to_string()
}
