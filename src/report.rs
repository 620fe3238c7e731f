use crate::lexicon::Term;

/// Render the dictionary for a task as a standalone HTML document.
pub fn render(task_name: &str, task_description: &str, terms: &[Term]) -> String {
    let term_items: String = terms
        .iter()
        .map(|t| format!("<li><strong>{}:</strong> {}</li>", t.term, t.definition))
        .collect();

    format!(
        r#"<html>
<head>
    <title>Logistics/Business Dictionary</title>
    <style>
        body {{
            font-family: Arial, sans-serif;
            margin: 20px;
            padding: 20px;
            background-color: #f9f9f9;
            color: #333;
        }}
        h1 {{
            color: #2c3e50;
            border-bottom: 2px solid #3498db;
            padding-bottom: 10px;
        }}
        p {{
            font-size: 16px;
            line-height: 1.5;
        }}
        h2 {{
            color: #2980b9;
            margin-top: 30px;
        }}
        ul {{
            list-style-type: none;
            padding: 0;
        }}
        li {{
            background: #ecf0f1;
            margin: 10px 0;
            padding: 15px;
            border-radius: 5px;
            box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
        }}
        li strong {{
            color: #2c3e50;
        }}
    </style>
</head>
<body>
    <h1>Dictionary for Task: {task_name}</h1>
    <p><strong>Description:</strong> {task_description}</p>
    <h2>Generated Terms</h2>
    <ul>
        {term_items}
    </ul>
</body>
</html>
"#
    )
}
