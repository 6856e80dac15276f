//! Home page handler.

use axum::response::Html;

/// Static home page: a title, a success indicator, and links to the two API
/// routes. No templating inputs - a deployment harness only greps it for the
/// success message.
const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Test Web App</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            max-width: 800px;
            margin: 50px auto;
            padding: 20px;
            background-color: #f5f5f5;
        }
        .container {
            background-color: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        h1 {
            color: #333;
        }
        .status {
            color: #28a745;
            font-weight: bold;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Test Web Application</h1>
        <p class="status">&#10003; Application is running successfully!</p>
        <p>This is a test web application deployed using pdeploy scripts.</p>
        <p><a href="/api/status">Check API Status</a></p>
        <p><a href="/api/health">Health Check</a></p>
    </div>
</body>
</html>
"#;

/// Home page handler.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
