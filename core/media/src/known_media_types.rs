macro_rules! known_media_types {
    ($cont:ident) => ($cont! {
        ANY_TYPE (is_any_type): "any media type", "*", "*",
        ANY_TEXT_TYPE (is_any_text_type): "any text type", "text", "*",
        ANY_IMAGE_TYPE (is_any_image_type): "any image type", "image", "*",
        ANY_AUDIO_TYPE (is_any_audio_type): "any audio type", "audio", "*",
        ANY_VIDEO_TYPE (is_any_video_type): "any video type", "video", "*",
        ANY_APPLICATION_TYPE (is_any_application_type): "any application type", "application", "*",
        ANY_FONT_TYPE (is_any_font_type): "any font type", "font", "*",

        CACHE_MANIFEST_UTF_8 (is_cache_manifest_utf_8): "HTML5 cache manifest", "text", "cache-manifest"; "charset" => "utf-8",
        CSS_UTF_8 (is_css_utf_8): "CSS", "text", "css"; "charset" => "utf-8",
        CSV_UTF_8 (is_csv_utf_8): "CSV", "text", "csv"; "charset" => "utf-8",
        HTML_UTF_8 (is_html_utf_8): "HTML", "text", "html"; "charset" => "utf-8",
        I_CALENDAR_UTF_8 (is_i_calendar_utf_8): "iCalendar", "text", "calendar"; "charset" => "utf-8",
        PLAIN_TEXT_UTF_8 (is_plain_text_utf_8): "plain text", "text", "plain"; "charset" => "utf-8",
        TEXT_JAVASCRIPT_UTF_8 (is_text_javascript_utf_8): "JavaScript", "text", "javascript"; "charset" => "utf-8",
        TSV_UTF_8 (is_tsv_utf_8): "tab separated values", "text", "tab-separated-values"; "charset" => "utf-8",
        VCARD_UTF_8 (is_vcard_utf_8): "vCard", "text", "vcard"; "charset" => "utf-8",
        WML_UTF_8 (is_wml_utf_8): "WML", "text", "vnd.wap.wml"; "charset" => "utf-8",
        XML_UTF_8 (is_xml_utf_8): "XML as text", "text", "xml"; "charset" => "utf-8",
        VTT_UTF_8 (is_vtt_utf_8): "WebVTT", "text", "vtt"; "charset" => "utf-8",

        BMP (is_bmp): "BMP", "image", "bmp",
        GIF (is_gif): "GIF", "image", "gif",
        ICO (is_ico): "ICO", "image", "vnd.microsoft.icon",
        JPEG (is_jpeg): "JPEG", "image", "jpeg",
        PNG (is_png): "PNG", "image", "png",
        PSD (is_psd): "Photoshop", "image", "vnd.adobe.photoshop",
        SVG_UTF_8 (is_svg_utf_8): "SVG", "image", "svg+xml"; "charset" => "utf-8",
        TIFF (is_tiff): "TIFF", "image", "tiff",
        WEBP (is_webp): "WEBP", "image", "webp",

        MP4_AUDIO (is_mp4_audio): "MP4 audio", "audio", "mp4",
        MPEG_AUDIO (is_mpeg_audio): "MPEG audio", "audio", "mpeg",
        OGG_AUDIO (is_ogg_audio): "Ogg audio", "audio", "ogg",
        WEBM_AUDIO (is_webm_audio): "WebM audio", "audio", "webm",

        MP4_VIDEO (is_mp4_video): "MP4 video", "video", "mp4",
        MPEG_VIDEO (is_mpeg_video): "MPEG video", "video", "mpeg",
        OGG_VIDEO (is_ogg_video): "Ogg video", "video", "ogg",
        QUICKTIME (is_quicktime): "QuickTime", "video", "quicktime",
        WEBM_VIDEO (is_webm_video): "WebM video", "video", "webm",
        WMV (is_wmv): "Windows Media Video", "video", "x-ms-wmv",

        APPLICATION_XML_UTF_8 (is_application_xml_utf_8): "XML", "application", "xml"; "charset" => "utf-8",
        ATOM_UTF_8 (is_atom_utf_8): "Atom", "application", "atom+xml"; "charset" => "utf-8",
        BZIP2 (is_bzip2): "bzip2", "application", "x-bzip2",
        EPUB (is_epub): "EPUB", "application", "epub+zip",
        FORM_DATA (is_form_data): "forms", "application", "x-www-form-urlencoded",
        GZIP (is_gzip): "gzip", "application", "x-gzip",
        JAVASCRIPT_UTF_8 (is_javascript_utf_8): "JavaScript", "application", "javascript"; "charset" => "utf-8",
        JSON_UTF_8 (is_json_utf_8): "JSON", "application", "json"; "charset" => "utf-8",
        MANIFEST_JSON_UTF_8 (is_manifest_json_utf_8): "web app manifest", "application", "manifest+json"; "charset" => "utf-8",
        MSGPACK (is_msgpack): "MessagePack", "application", "msgpack",
        OCTET_STREAM (is_octet_stream): "binary data", "application", "octet-stream",
        OGG_CONTAINER (is_ogg_container): "Ogg container", "application", "ogg",
        PDF (is_pdf): "PDF", "application", "pdf",
        POSTSCRIPT (is_postscript): "PostScript", "application", "postscript",
        PROTOBUF (is_protobuf): "Protocol Buffers", "application", "protobuf",
        RTF_UTF_8 (is_rtf_utf_8): "RTF", "application", "rtf"; "charset" => "utf-8",
        TAR (is_tar): "tar", "application", "x-tar",
        WASM (is_wasm): "WebAssembly", "application", "wasm",
        XHTML_UTF_8 (is_xhtml_utf_8): "XHTML", "application", "xhtml+xml"; "charset" => "utf-8",
        ZIP (is_zip): "ZIP", "application", "zip",

        MULTIPART_FORM_DATA (is_multipart_form_data): "multipart form data", "multipart", "form-data",

        WOFF (is_woff): "WOFF", "font", "woff",
        WOFF2 (is_woff2): "WOFF2", "font", "woff2",
        TTF (is_ttf): "TTF", "font", "ttf",
        OTF (is_otf): "OTF", "font", "otf",
    })
}

macro_rules! known_extensions {
    ($cont:ident) => ($cont! {
        "txt" => PLAIN_TEXT_UTF_8,
        "html" => HTML_UTF_8,
        "htm" => HTML_UTF_8,
        "css" => CSS_UTF_8,
        "csv" => CSV_UTF_8,
        "tsv" => TSV_UTF_8,
        "ics" => I_CALENDAR_UTF_8,
        "vcf" => VCARD_UTF_8,
        "vtt" => VTT_UTF_8,
        "xml" => XML_UTF_8,
        "js" => TEXT_JAVASCRIPT_UTF_8,
        "mjs" => TEXT_JAVASCRIPT_UTF_8,
        "json" => JSON_UTF_8,
        "webmanifest" => MANIFEST_JSON_UTF_8,
        "bmp" => BMP,
        "gif" => GIF,
        "ico" => ICO,
        "jpeg" => JPEG,
        "jpg" => JPEG,
        "png" => PNG,
        "psd" => PSD,
        "svg" => SVG_UTF_8,
        "tif" => TIFF,
        "tiff" => TIFF,
        "webp" => WEBP,
        "m4a" => MP4_AUDIO,
        "mp3" => MPEG_AUDIO,
        "oga" => OGG_AUDIO,
        "ogg" => OGG_AUDIO,
        "weba" => WEBM_AUDIO,
        "mp4" => MP4_VIDEO,
        "mpeg" => MPEG_VIDEO,
        "mpg" => MPEG_VIDEO,
        "ogv" => OGG_VIDEO,
        "mov" => QUICKTIME,
        "webm" => WEBM_VIDEO,
        "wmv" => WMV,
        "atom" => ATOM_UTF_8,
        "bz2" => BZIP2,
        "epub" => EPUB,
        "gz" => GZIP,
        "msgpack" => MSGPACK,
        "bin" => OCTET_STREAM,
        "pdf" => PDF,
        "ps" => POSTSCRIPT,
        "rtf" => RTF_UTF_8,
        "tar" => TAR,
        "wasm" => WASM,
        "xhtml" => XHTML_UTF_8,
        "zip" => ZIP,
        "woff" => WOFF,
        "woff2" => WOFF2,
        "ttf" => TTF,
        "otf" => OTF,
    })
}
