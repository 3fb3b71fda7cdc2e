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

pub fn route_request(method: &str, path: &str, body: &str) -> HttpResponse {
    match (method, path) {
        ("GET", "/") => HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: "text/html; charset=utf-8",
            body: index_html(),
        },
        ("GET", "/api/health") => match api::health_payload() {
            Ok(payload) => json_ok(payload),
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        ("GET", "/api/variants") => match api::variants_payload() {
            Ok(payload) => json_ok(payload),
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        ("POST", "/api/duel") => match api::duel_payload(body) {
            Ok(payload) => json_ok(payload),
            Err(api::DuelError::Parse(err)) => {
                error_response(400, "Bad Request", &format!("Invalid request body: {err}"))
            }
            Err(api::DuelError::Validation(msg)) => error_response(400, "Bad Request", &msg),
        },
        ("POST", "/api/scenario") => match api::scenario_payload(body) {
            Ok(payload) => json_ok(payload),
            Err(api::ScenarioApiError::Parse(err)) => {
                error_response(400, "Bad Request", &format!("Invalid request body: {err}"))
            }
            Err(api::ScenarioApiError::Validation(issues)) => {
                issues_error_response(400, "Bad Request", &issues)
            }
        },
        _ => error_response(404, "Not Found", "Route not found"),
    }
}

fn json_ok(payload: String) -> HttpResponse {
    HttpResponse {
        status_code: 200,
        status_text: "OK",
        content_type: "application/json",
        body: payload,
    }
}

fn issues_error_response(
    status_code: u16,
    status_text: &'static str,
    issues: &[String],
) -> HttpResponse {
    let fallback =
        "{\n  \"status\": \"error\",\n  \"message\": \"Validation failed\"\n}".to_string();

    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: serde_json::to_string_pretty(&serde_json::json!({
            "status": "error",
            "message": "Validation failed",
            "issues": issues,
        }))
        .unwrap_or(fallback),
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
  <title>Barrow API Console</title>
  <style>
    body { font-family: Arial, sans-serif; max-width: 900px; margin: 24px auto; padding: 0 12px; }
    h1 { margin-bottom: 8px; }
    .card { border: 1px solid #ddd; border-radius: 8px; padding: 14px; margin: 14px 0; }
    label { display:block; margin: 8px 0 4px; font-weight: 600; }
    input, textarea { width: 100%; padding: 8px; box-sizing: border-box; }
    button { margin-top: 12px; padding: 8px 14px; }
    pre { background: #111; color: #aef2ae; padding: 12px; overflow: auto; border-radius: 6px; min-height: 180px; }
  </style>
</head>
<body>
  <h1>Barrow Local API</h1>
  <p>Browser console for the undead combat engine.</p>

  <div class="card">
    <strong>Catalog</strong>
    <div>
      <button id="health-btn">GET /api/health</button>
      <button id="variants-btn">GET /api/variants</button>
    </div>
  </div>

  <div class="card">
    <strong>Duel</strong>
    <label for="attacker">Attacker variant</label>
    <input id="attacker" value="Ghost" />
    <label for="target">Target variant</label>
    <input id="target" value="Mummy" />
    <label for="ability">Ability</label>
    <input id="ability" value="Haunt" />
    <div><button id="duel-btn">POST /api/duel</button></div>
  </div>

  <div class="card">
    <strong>Scenario</strong>
    <label for="scenario">Fixture JSON</label>
    <textarea id="scenario" rows="8">{"undead": [], "cases": []}</textarea>
    <div><button id="scenario-btn">POST /api/scenario</button></div>
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

    document.getElementById('variants-btn').addEventListener('click', () => {
      request('/api/variants', { method: 'GET' });
    });

    document.getElementById('duel-btn').addEventListener('click', () => {
      const payload = {
        attacker: { variant: document.getElementById('attacker').value },
        target: { variant: document.getElementById('target').value },
        ability: document.getElementById('ability').value,
      };
      request('/api/duel', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(payload),
      });
    });

    document.getElementById('scenario-btn').addEventListener('click', () => {
      request('/api/scenario', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: document.getElementById('scenario').value,
      });
    });
  </script>
</body>
</html>
"#
    .to_string()
}
